//! Main application for the PNT GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, DragValue, Frame, RichText, SidePanel, TopBottomPanel};

use super::session::{GameMode, GameSession, NewGameSettings};
use super::theme::*;
use super::token_view::TokenView;
use crate::{Player, Solver};

/// Main PNT application
pub struct PntApp {
    session: GameSession,
    token_view: TokenView,
    show_stats: bool,
    /// Settings edited in the side panel, applied on the next new game
    pending: NewGameSettings,
}

impl PntApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, solver: Solver) -> Self {
        Self::with_solver(solver)
    }

    fn with_solver(solver: Solver) -> Self {
        let settings = NewGameSettings::default();
        Self {
            session: GameSession::new(GameMode::default(), settings, solver),
            token_view: TokenView::default(),
            show_stats: true,
            pending: settings,
        }
    }

    fn new_game(&mut self, mode: GameMode) {
        self.session.mode = mode;
        self.session.settings = self.pending;
        self.session.reset();
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (vs Engine - Player 1)").clicked() {
                        self.new_game(GameMode::PvE { human: Player::One });
                        ui.close_menu();
                    }
                    if ui.button("New Game (vs Engine - Player 2)").clicked() {
                        self.new_game(GameMode::PvE { human: Player::Two });
                        ui.close_menu();
                    }
                    if ui.button("New Game (Two Players)").clicked() {
                        self.new_game(GameMode::PvP);
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Undo").clicked() {
                        self.session.undo();
                        ui.close_menu();
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_stats, "Search Stats (S)");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let mode_text = match self.session.mode {
                        GameMode::PvE { human } => format!("vs Engine - You: Player {human}"),
                        GameMode::PvP => "Two Players".to_string(),
                    };
                    ui.label(mode_text);
                });
            });
        });
    }

    /// Render the side panel with game info and search stats
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                self.render_title_card(ui);
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);

                self.render_actions_card(ui);
                ui.add_space(10.0);

                self.render_settings_card(ui);

                if self.show_stats {
                    ui.add_space(10.0);
                    self.render_stats_card(ui);
                }

                if let Some(winner) = self.session.winner() {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui, winner);
                }

                if let Some(msg) = &self.session.message {
                    ui.add_space(10.0);
                    render_message_card(ui, msg);
                }
            });
    }

    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("PNT").size(22.0).strong().color(TEXT_PRIMARY));
        });
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("Pick Numbered Tokens").size(11.0).color(TEXT_MUTED));
        });
    }

    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let player = self.session.state.player_to_move();

            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(egui::Vec2::splat(40.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 18.0, player_color(player));
                ui.painter().text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    player.to_string(),
                    egui::FontId::proportional(20.0),
                    TEXT_PRIMARY,
                );

                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.label(RichText::new(format!("PLAYER {player}")).size(18.0).strong().color(TEXT_PRIMARY));

                    let status = if self.session.is_ai_thinking() {
                        ("Engine thinking...", STATUS_THINKING)
                    } else if self.session.is_game_over() {
                        ("Game Over", WIN_HIGHLIGHT)
                    } else if self.session.is_human_turn() {
                        ("Your turn", STATUS_READY)
                    } else {
                        ("Engine to move", STATUS_THINKING)
                    };
                    ui.label(RichText::new(status.0).size(12.0).color(status.1));
                });
            });

            ui.add_space(6.0);
            let eval = self.session.state.static_evaluation();
            ui.label(RichText::new(format!("Static evaluation: {eval:+.2}")).size(11.0).color(TEXT_SECONDARY));
            ui.label(
                RichText::new(format!("Legal tokens: {:?}", self.session.state.legal_moves()))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );

            if let Some(elapsed) = self.session.ai_thinking_elapsed() {
                ui.label(RichText::new(format!("{:.2}s", elapsed.as_secs_f32())).size(20.0).color(STATUS_THINKING));
            } else if let Some(time) = self.session.last_ai_time {
                ui.label(RichText::new(format!("Last engine move: {:.3}s", time.as_secs_f32())).size(10.0).color(TEXT_MUTED));
            }
        });
    }

    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                let btn_frame = Frame::new()
                    .fill(BUTTON_BG)
                    .corner_radius(CornerRadius::same(6))
                    .inner_margin(8.0);

                btn_frame.show(ui, |ui| {
                    if clickable_label(ui, "Undo").clicked() {
                        self.session.undo();
                    }
                });

                ui.add_space(4.0);

                btn_frame.show(ui, |ui| {
                    if clickable_label(ui, "New Game").clicked() {
                        self.new_game(self.session.mode);
                    }
                });

                if self.session.mode == GameMode::PvP {
                    ui.add_space(4.0);
                    btn_frame.show(ui, |ui| {
                        if clickable_label(ui, "Hint").clicked() {
                            self.session.request_suggestion();
                        }
                    });
                }
            });

            ui.add_space(8.0);
            ui.label(
                RichText::new(format!("Move #{}", self.session.state.num_taken()))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    fn render_settings_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("NEW GAME SETTINGS").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.label(RichText::new("Tokens").size(11.0).color(TEXT_SECONDARY));
                let max_tokens = self.pending.max_tokens();
                ui.add(DragValue::new(&mut self.pending.total_tokens).range(1..=max_tokens));
            });
            ui.horizontal(|ui| {
                ui.label(RichText::new("Depth (0 = full)").size(11.0).color(TEXT_SECONDARY));
                ui.add(DragValue::new(&mut self.pending.depth).range(0..=20));
            });
            self.pending = self.pending.clamped();
        });
    }

    fn render_stats_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("SEARCH STATS").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            let Some(result) = &self.session.last_ai_result else {
                ui.label(RichText::new("No search yet").size(10.0).color(TEXT_MUTED));
                return;
            };

            let stats = &result.stats;
            let rows = [
                ("Mode", format!("{:?}", result.search_mode)),
                ("Value", format!("{:+.3}", result.value)),
                ("Visited", stats.nodes_visited.to_string()),
                ("Evaluated", stats.nodes_evaluated.to_string()),
                ("Max depth", stats.max_depth_reached.to_string()),
                ("Pruned", stats.pruned.to_string()),
                ("Branching", format!("{:.3}", stats.effective_branching_factor())),
                ("Time", format!("{}ms", result.time_ms)),
            ];
            for (label, value) in rows {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(label).size(10.0).color(TEXT_SECONDARY));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(RichText::new(value).size(10.0).color(TEXT_PRIMARY));
                    });
                });
            }

            if let Some(token) = result.best_move {
                ui.add_space(4.0);
                ui.label(RichText::new(format!("-> take {token}")).size(12.0).strong().color(WIN_HIGHLIGHT));
            }
        });
    }

    fn render_game_over_card(&mut self, ui: &mut egui::Ui, winner: Player) {
        Frame::new()
            .fill(egui::Color32::from_rgb(45, 80, 55))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(12.0).color(egui::Color32::from_rgb(180, 255, 180)));
                    ui.add_space(8.0);
                    ui.label(
                        RichText::new(format!("PLAYER {winner} WINS!"))
                            .size(18.0)
                            .strong()
                            .color(player_color(winner)),
                    );
                    ui.add_space(4.0);
                    ui.label(
                        RichText::new(format!("Player {} has no legal token", winner.opponent()))
                            .size(11.0)
                            .color(TEXT_SECONDARY),
                    );
                    ui.add_space(12.0);

                    Frame::new()
                        .fill(egui::Color32::from_rgb(60, 100, 70))
                        .corner_radius(CornerRadius::same(6))
                        .inner_margin(10.0)
                        .show(ui, |ui| {
                            if clickable_label(ui, "New Game").clicked() {
                                self.new_game(self.session.mode);
                            }
                        });
                });
            });
    }

    fn render_tokens(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            let accept_input = self.session.is_human_turn() && !self.session.is_ai_thinking();
            let clicked = self.token_view.show(
                ui,
                &self.session.state,
                self.session.suggested_move,
                accept_input,
            );

            if let Some(token) = clicked {
                if let Err(msg) = self.session.try_take(token) {
                    self.session.message = Some(msg);
                }
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        let (stats, hint, undo, new_game) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::S),
                i.key_pressed(egui::Key::H),
                i.key_pressed(egui::Key::U),
                i.key_pressed(egui::Key::N),
            )
        });

        if stats {
            self.show_stats = !self.show_stats;
        }
        if hint && self.session.mode == GameMode::PvP {
            self.session.request_suggestion();
        }
        if undo {
            self.session.undo();
        }
        if new_game {
            self.new_game(self.session.mode);
        }
    }
}

fn clickable_label(ui: &mut egui::Ui, text: &str) -> egui::Response {
    ui.add(egui::Label::new(RichText::new(text).size(12.0).color(TEXT_PRIMARY)).sense(egui::Sense::click()))
}

fn render_message_card(ui: &mut egui::Ui, msg: &str) {
    Frame::new()
        .fill(STATUS_ERROR)
        .corner_radius(CornerRadius::same(8))
        .inner_margin(10.0)
        .show(ui, |ui| {
            ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
        });
}

impl eframe::App for PntApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.session.check_ai_result();

        if self.session.is_ai_turn() && !self.session.is_ai_thinking() && !self.session.is_game_over() {
            self.session.start_ai_thinking();
        }

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_tokens(ctx);

        if self.session.is_ai_thinking() || self.session.is_hint_pending() {
            ctx.request_repaint();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::session::MAX_UNBOUNDED_TOKENS;

    fn render_panel(app: &mut PntApp) {
        let ctx = Context::default();
        let _ = ctx.run(egui::RawInput::default(), |ctx| app.render_side_panel(ctx));
    }

    #[test]
    fn test_settings_card_caps_unbounded_pool() {
        let mut app = PntApp::with_solver(Solver::new());
        app.pending = NewGameSettings {
            total_tokens: 80,
            depth: 0,
        };
        render_panel(&mut app);
        assert_eq!(app.pending.total_tokens, MAX_UNBOUNDED_TOKENS);

        app.new_game(GameMode::PvP);
        assert_eq!(app.session.state.total_tokens(), MAX_UNBOUNDED_TOKENS);
    }

    #[test]
    fn test_stats_card_renders_search_result() {
        let mut app = PntApp::with_solver(Solver::new());
        app.session.last_ai_result = Some(Solver::new().solve(&app.session.state));
        render_panel(&mut app);
        assert!(app.show_stats);
        assert!(app.session.last_ai_result.as_ref().is_some_and(|r| r.best_move.is_some()));
    }
}
