//! Token grid rendering for the PNT GUI

use egui::{Align2, CornerRadius, FontId, Painter, Pos2, Rect, Sense, Stroke, StrokeKind, Vec2};

use super::theme::*;
use crate::{GameState, Player};

/// Token grid handles rendering and input for the token pool
pub struct TokenView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    columns: u32,
    grid_rect: Rect,
}

impl Default for TokenView {
    fn default() -> Self {
        Self {
            cell_size: 48.0,
            columns: 1,
            grid_rect: Rect::NOTHING,
        }
    }
}

/// Number of grid columns for a pool of `total` tokens
pub fn columns_for(total: u32) -> u32 {
    let mut columns = 1;
    while columns * columns < total {
        columns += 1;
    }
    columns.max(1)
}

impl TokenView {
    /// Render the token grid and return the clicked legal token, if any
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        state: &GameState,
        suggested_move: Option<u32>,
        accept_input: bool,
    ) -> Option<u32> {
        let total = state.total_tokens();
        self.columns = columns_for(total);
        let rows = total.div_ceil(self.columns).max(1);

        let available = ui.available_size();
        let by_width = (available.x - 2.0 * GRID_MARGIN) / self.columns as f32;
        let by_height = (available.y - 2.0 * GRID_MARGIN) / rows as f32;
        self.cell_size = by_width.min(by_height).clamp(16.0, MAX_CELL_SIZE);

        let size = Vec2::new(
            2.0 * GRID_MARGIN + self.columns as f32 * self.cell_size,
            2.0 * GRID_MARGIN + rows as f32 * self.cell_size,
        );
        let (response, painter) = ui.allocate_painter(size, Sense::click());
        self.grid_rect = response.rect;

        painter.rect_filled(self.grid_rect, CornerRadius::same(6), GRID_BG);

        let legal = state.legal_moves();
        let last = state.last_taken();

        for token in 1..=total {
            let order = state.taken_tokens().iter().position(|&t| t == token);
            self.draw_token(&painter, token, order, legal.contains(&token));
        }

        if let Some(token) = last {
            let rect = self.token_rect(token);
            painter.rect_stroke(
                rect,
                CornerRadius::same(6),
                Stroke::new(LAST_MOVE_STROKE, LAST_MOVE_MARKER),
                StrokeKind::Inside,
            );
        }

        if let Some(token) = suggested_move {
            painter.rect_filled(self.token_rect(token), CornerRadius::same(6), suggestion_fill());
        }

        if !accept_input {
            return None;
        }

        let token = response
            .hover_pos()
            .and_then(|pointer| self.screen_to_token(pointer, total))
            .filter(|token| legal.contains(token))?;

        painter.rect_filled(self.token_rect(token), CornerRadius::same(6), hover_legal());

        response.clicked().then_some(token)
    }

    /// Draw one cell. Taken tokens show who took them and when.
    fn draw_token(&self, painter: &Painter, token: u32, order: Option<usize>, legal: bool) {
        let rect = self.token_rect(token);
        let fill = match order {
            Some(index) => player_color(Player::from_parity(index)),
            None if legal => TOKEN_LEGAL,
            None => TOKEN_AVAILABLE,
        };
        let text_color = if legal { TEXT_DARK } else { TEXT_PRIMARY };

        painter.rect_filled(rect, CornerRadius::same(6), fill);
        painter.rect_stroke(
            rect,
            CornerRadius::same(6),
            Stroke::new(1.0, TOKEN_BORDER),
            StrokeKind::Inside,
        );
        painter.text(
            rect.center(),
            Align2::CENTER_CENTER,
            token.to_string(),
            FontId::proportional(self.cell_size * 0.4),
            text_color,
        );

        if let Some(index) = order {
            painter.text(
                rect.left_top() + Vec2::new(5.0, 4.0),
                Align2::LEFT_TOP,
                format!("#{}", index + 1),
                FontId::proportional((self.cell_size * 0.2).max(8.0)),
                TEXT_PRIMARY,
            );
        }
    }

    fn token_rect(&self, token: u32) -> Rect {
        let index = token.saturating_sub(1);
        let col = index % self.columns;
        let row = index / self.columns;
        let min = self.grid_rect.min
            + Vec2::new(
                GRID_MARGIN + col as f32 * self.cell_size,
                GRID_MARGIN + row as f32 * self.cell_size,
            );
        Rect::from_min_size(min, Vec2::splat(self.cell_size)).shrink(CELL_GAP / 2.0)
    }

    /// Convert screen coordinates to a token number
    pub fn screen_to_token(&self, screen_pos: Pos2, total: u32) -> Option<u32> {
        let relative = screen_pos - self.grid_rect.min - Vec2::splat(GRID_MARGIN);
        if relative.x < 0.0 || relative.y < 0.0 {
            return None;
        }

        let col = (relative.x / self.cell_size).floor() as u32;
        let row = (relative.y / self.cell_size).floor() as u32;
        if col >= self.columns {
            return None;
        }

        let token = row * self.columns + col + 1;
        (token <= total).then_some(token)
    }
}
