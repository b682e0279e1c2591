//! Main application for the Gobang GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel};

use super::board_view::BoardView;
use super::theme::*;
use crate::{Game, Stone};

/// Main Gobang application
pub struct GobangApp {
    game: Game,
    board_view: BoardView,
}

impl Default for GobangApp {
    fn default() -> Self {
        Self {
            game: Game::new(),
            board_view: BoardView::default(),
        }
    }
}

impl GobangApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    fn new_game(&mut self) {
        self.game.reset();
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (N)").clicked() {
                        self.new_game();
                        ui.close_menu();
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label("Two players - hotseat");
                });
            });
        });
    }

    /// Render the side panel with game info
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(220.0)
            .max_width(260.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);

                self.render_title_card(ui);
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);

                self.render_moves_card(ui);

                if self.game.is_over() {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui);
                }
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    /// Render title card
    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("●○").size(20.0).color(WHITE_ACCENT));
            ui.add_space(4.0);
            ui.label(RichText::new("GOBANG").size(22.0).strong().color(TEXT_PRIMARY));
        });
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("五子棋").size(11.0).color(TEXT_MUTED));
        });
    }

    /// Render turn indicator card
    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let is_black = self.game.board.to_move() == Stone::Black;
            let (stone_char, color_name, accent) = if is_black {
                ("●", "BLACK", BLACK_ACCENT)
            } else {
                ("○", "WHITE", WHITE_ACCENT)
            };

            ui.horizontal(|ui| {
                let stone_color = if is_black { TEXT_PRIMARY } else { PANEL_BG };

                let (rect, _) = ui.allocate_exact_size(egui::Vec2::new(48.0, 48.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 22.0, accent);
                ui.painter().text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    stone_char,
                    egui::FontId::proportional(28.0),
                    stone_color,
                );

                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    ui.label(RichText::new(color_name).size(18.0).strong().color(TEXT_PRIMARY));

                    let status = if self.game.is_over() {
                        ("Game over", WIN_HIGHLIGHT)
                    } else {
                        ("To move", TEXT_SECONDARY)
                    };
                    ui.label(RichText::new(status.0).size(12.0).color(status.1));
                });
            });
        });
    }

    /// Render move count card
    fn render_moves_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("MOVES").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);
            ui.label(
                RichText::new(format!("{}", self.game.board.stone_count()))
                    .size(24.0)
                    .color(TEXT_PRIMARY),
            );
            if let Some(pos) = self.game.last_move {
                let col = (b'A' + pos.x) as char;
                let row = crate::BOARD_SIZE - pos.y as usize;
                ui.add_space(4.0);
                ui.label(
                    RichText::new(format!("Last: {}{}", col, row))
                        .size(11.0)
                        .color(TEXT_SECONDARY),
                );
            }
        });
    }

    /// Render game over card with a new-game control
    fn render_game_over_card(&mut self, ui: &mut egui::Ui) {
        let Some(winner) = self.game.winner() else {
            return;
        };
        let (name, symbol, accent) = if winner == Stone::Black {
            ("BLACK", "●", BLACK_ACCENT)
        } else {
            ("WHITE", "○", WHITE_ACCENT)
        };

        Frame::new()
            .fill(WIN_CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(12.0).color(TEXT_SECONDARY));
                    ui.add_space(8.0);

                    ui.horizontal(|ui| {
                        ui.add_space(ui.available_width() / 2.0 - 60.0);
                        ui.label(RichText::new(symbol).size(32.0).color(accent));
                        ui.add_space(8.0);
                        ui.vertical(|ui| {
                            ui.label(RichText::new(name).size(18.0).strong().color(TEXT_PRIMARY));
                            ui.label(RichText::new("WINS!").size(14.0).color(WIN_HIGHLIGHT));
                        });
                    });

                    ui.add_space(4.0);
                    ui.label(RichText::new("by 5-in-a-row").size(11.0).color(TEXT_SECONDARY));

                    ui.add_space(12.0);

                    Frame::new()
                        .fill(WIN_BUTTON_BG)
                        .corner_radius(CornerRadius::same(6))
                        .inner_margin(10.0)
                        .show(ui, |ui| {
                            if ui
                                .add(
                                    egui::Label::new(
                                        RichText::new("New Game").size(14.0).strong().color(TEXT_PRIMARY),
                                    )
                                    .sense(egui::Sense::click()),
                                )
                                .clicked()
                            {
                                self.new_game();
                            }
                        });
                });
            });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            ui.style_mut().visuals.panel_fill = egui::Color32::from_rgb(40, 42, 46);

            let clicked = self.board_view.show(
                ui,
                &self.game.board,
                self.game.board.to_move(),
                self.game.last_move,
                self.game.winning_line,
                self.game.is_over(),
            );

            if let Some(pos) = clicked {
                // Rejections are silent; the board simply does not change
                let _ = self.game.submit_move(pos.x as i32, pos.y as i32);
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        ctx.input(|i| {
            // N - New game
            if i.key_pressed(egui::Key::N) {
                self.new_game();
            }
        });
    }
}

impl eframe::App for GobangApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);
    }
}
