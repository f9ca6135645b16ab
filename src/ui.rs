use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Paragraph, Widget, Wrap},
};
use webbrowser::Browser;

use crate::{App, AppState};

const HORIZONTAL_MARGIN: u16 = 5;
const VERTICAL_MARGIN: u16 = 2;

const TARGET_WIDTH: u16 = 12;
const TARGET_HEIGHT: u16 = 5;

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // styles
        let bold_style = Style::default().add_modifier(Modifier::BOLD);

        let dim_bold_style = Style::default()
            .patch(bold_style)
            .add_modifier(Modifier::DIM);

        let italic_style = Style::default().add_modifier(Modifier::ITALIC);

        let magenta_bold_style = Style::default().patch(bold_style).fg(Color::Magenta);

        match self.state {
            AppState::Start => {
                let chunks = Layout::default()
                    .direction(Direction::Vertical)
                    .horizontal_margin(HORIZONTAL_MARGIN)
                    .constraints(
                        [
                            Constraint::Min(1),
                            Constraint::Length(1), // title
                            Constraint::Length(1), // best so far
                            Constraint::Length(1), // padding
                            Constraint::Length(1), // start hint
                            Constraint::Min(1),
                        ]
                        .as_ref(),
                    )
                    .split(area);

                let title = Paragraph::new(Span::styled("t a p p", magenta_bold_style))
                    .alignment(Alignment::Center);
                title.render(chunks[1], buf);

                if self.best > 0 {
                    let best = Paragraph::new(Span::styled(
                        format!("best: {}", self.best),
                        dim_bold_style,
                    ))
                    .alignment(Alignment::Center);
                    best.render(chunks[2], buf);
                }

                let hint = Paragraph::new(Span::styled(
                    "press (space) to start / (esc) to quit",
                    italic_style,
                ))
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true });
                hint.render(chunks[4], buf);
            }
            AppState::Playing => {
                let chunks = Layout::default()
                    .direction(Direction::Vertical)
                    .horizontal_margin(HORIZONTAL_MARGIN)
                    .vertical_margin(VERTICAL_MARGIN)
                    .constraints(
                        [
                            Constraint::Length(1), // score
                            Constraint::Length(1), // time
                            Constraint::Min(TARGET_HEIGHT), // target field
                            Constraint::Length(1), // legend
                        ]
                        .as_ref(),
                    )
                    .split(area);

                let score = Paragraph::new(Span::styled(
                    format!("Score: {}", self.session.score),
                    bold_style,
                ))
                .alignment(Alignment::Center);
                score.render(chunks[0], buf);

                let time = Paragraph::new(Span::styled(
                    format!("Time: {}", self.session.seconds_remaining),
                    dim_bold_style,
                ))
                .alignment(Alignment::Center);
                time.render(chunks[1], buf);

                if self.session.target_visible {
                    let target_area =
                        centered_rect(TARGET_WIDTH, TARGET_HEIGHT, chunks[2]);
                    let target = Block::default()
                        .style(Style::default().bg(Color::Magenta));
                    target.render(target_area, buf);
                }

                let legend =
                    Paragraph::new(Span::styled("(space) tap / (esc) quit", italic_style))
                        .alignment(Alignment::Center);
                legend.render(chunks[3], buf);
            }
            AppState::Summary => {
                let chunks = Layout::default()
                    .direction(Direction::Vertical)
                    .horizontal_margin(HORIZONTAL_MARGIN)
                    .vertical_margin(VERTICAL_MARGIN)
                    .constraints(
                        [
                            Constraint::Min(1),
                            Constraint::Length(1), // game over
                            Constraint::Length(1), // final score
                            Constraint::Length(1), // best / new best
                            Constraint::Min(1),
                            Constraint::Length(1), // legend
                        ]
                        .as_ref(),
                    )
                    .split(area);

                let heading = Paragraph::new(Span::styled("Game Over", bold_style))
                    .alignment(Alignment::Center);
                heading.render(chunks[1], buf);

                let score = Paragraph::new(Span::styled(
                    format!("Your score was {}. Tap to restart!", self.session.score),
                    bold_style,
                ))
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true });
                score.render(chunks[2], buf);

                let best_line = if self.new_best {
                    Span::styled("new high score!", magenta_bold_style)
                } else {
                    Span::styled(format!("best: {}", self.best), dim_bold_style)
                };
                let best = Paragraph::new(best_line).alignment(Alignment::Center);
                best.render(chunks[3], buf);

                let legend = Paragraph::new(Span::styled(
                    String::from(if Browser::is_available() {
                        "(r)estart / (t)weet / (esc)ape"
                    } else {
                        "(r)estart / (esc)ape"
                    }),
                    italic_style,
                ));
                legend.render(chunks[5], buf);

                // Render celebration animation if active
                if self.celebration.is_active {
                    render_celebration_particles(&self.celebration, area, buf);
                }
            }
        }
    }
}

/// Largest `width` x `height` rect centered inside `area`.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Render celebration particles on top of the summary screen
fn render_celebration_particles(
    celebration: &crate::celebration::Celebration,
    area: Rect,
    buf: &mut Buffer,
) {
    let colors = [
        Color::Yellow,
        Color::Magenta,
        Color::Cyan,
        Color::Green,
        Color::Red,
        Color::Blue,
        Color::LightYellow,
    ];

    for particle in &celebration.particles {
        let x = particle.x as u16;
        let y = particle.y as u16;

        if x < area.width && y < area.height {
            let color = colors[particle.color_index % colors.len()];

            let alpha = 1.0 - (particle.age / particle.max_age);
            let style = if alpha > 0.7 {
                Style::default().fg(color).add_modifier(Modifier::BOLD)
            } else if alpha > 0.3 {
                Style::default().fg(color)
            } else {
                Style::default().fg(color).add_modifier(Modifier::DIM)
            };

            if let Some(cell) = buf.cell_mut((area.x + x, area.y + y)) {
                cell.set_symbol(&particle.symbol.to_string());
                cell.set_style(style);
            }
        }
    }
}
