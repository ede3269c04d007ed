//! Ratatui-based terminal UI.
//!
//! The interactive form: a unit system selector, measurement fields, and a
//! results panel showing the score, category, a scale bar, the health
//! recommendation, and the category reference table.

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Gauge, Paragraph, Row, Table, Wrap},
    Terminal,
};

use crate::app::AppError;
use crate::bmi::CATEGORY_BANDS;
use crate::form::FormState;
use crate::models::{BmiCategory, UnitSystem};

/// Display color for each category, keyed by category rather than branched
/// through the rendering code.
const CATEGORY_COLORS: [(BmiCategory, Color); 4] = [
    (BmiCategory::Underweight, Color::Blue),
    (BmiCategory::Normal, Color::Green),
    (BmiCategory::Overweight, Color::Yellow),
    (BmiCategory::Obese, Color::Red),
];

fn category_color(category: BmiCategory) -> Color {
    CATEGORY_COLORS
        .iter()
        .find(|(c, _)| *c == category)
        .map(|(_, color)| *color)
        .unwrap_or(Color::White)
}

/// Filled ratio of the scale bar: BMI relative to a display ceiling of 40
fn scale_ratio(bmi: f64) -> f64 {
    (bmi / 40.0).clamp(0.0, 1.0)
}

/// Start the TUI.
pub fn run() -> Result<(), AppError> {
    tracing::info!("starting interactive calculator");

    let _guard = TerminalGuard::new()?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new();
    app.event_loop(&mut terminal)
}

/// Ensures the terminal is restored (raw mode, alternate screen) on exit.
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> Result<Self, AppError> {
        enable_raw_mode()?;
        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(e.into());
        }
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

/// Form rows addressable by the cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Units,
    Weight,
    Height,
    Feet,
    Inches,
}

impl Field {
    fn label(&self, unit_system: UnitSystem) -> &'static str {
        match self {
            Field::Units => "Measurement System",
            Field::Weight => unit_system.weight_label(),
            Field::Height => "Height (cm)",
            Field::Feet => "Feet",
            Field::Inches => "Inches",
        }
    }

    fn placeholder(&self, unit_system: UnitSystem) -> &'static str {
        match self {
            Field::Units => "",
            Field::Weight => match unit_system {
                UnitSystem::Metric => "Enter weight in kg",
                UnitSystem::Imperial => "Enter weight in lbs",
            },
            Field::Height => "Enter height in cm",
            Field::Feet => "Feet",
            Field::Inches => "Inches",
        }
    }
}

const METRIC_FIELDS: [Field; 3] = [Field::Units, Field::Weight, Field::Height];
const IMPERIAL_FIELDS: [Field; 4] = [Field::Units, Field::Weight, Field::Feet, Field::Inches];

struct App {
    form: FormState,
    selected: usize,
}

impl App {
    fn new() -> Self {
        Self {
            form: FormState::new(),
            selected: 0,
        }
    }

    fn fields(&self) -> &'static [Field] {
        match self.form.input.unit_system {
            UnitSystem::Metric => &METRIC_FIELDS,
            UnitSystem::Imperial => &IMPERIAL_FIELDS,
        }
    }

    fn selected_field(&self) -> Field {
        self.fields()[self.selected]
    }

    fn active_text_mut(&mut self) -> Option<&mut String> {
        match self.selected_field() {
            Field::Units => None,
            Field::Weight => Some(&mut self.form.input.weight),
            Field::Height => Some(&mut self.form.input.height),
            Field::Feet => Some(&mut self.form.input.feet),
            Field::Inches => Some(&mut self.form.input.inches),
        }
    }

    fn toggle_units(&mut self) {
        let next = match self.form.input.unit_system {
            UnitSystem::Metric => UnitSystem::Imperial,
            UnitSystem::Imperial => UnitSystem::Metric,
        };
        self.form.set_unit_system(next);
        // The field list changed length; keep the cursor in range
        if self.selected >= self.fields().len() {
            self.selected = self.fields().len() - 1;
        }
    }

    fn event_loop<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<(), AppError> {
        let mut needs_redraw = true;
        loop {
            if needs_redraw {
                terminal.draw(|f| self.draw(f))?;
                needs_redraw = false;
            }

            if !event::poll(Duration::from_millis(100))? {
                continue;
            }

            match event::read()? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if self.handle_key(key.code) {
                        break;
                    }
                    needs_redraw = true;
                }
                Event::Resize(_, _) => {
                    needs_redraw = true;
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Returns true when the app should exit.
    fn handle_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Esc | KeyCode::Char('q') => return true,
            KeyCode::Up | KeyCode::BackTab => {
                if self.selected > 0 {
                    self.selected -= 1;
                }
            }
            KeyCode::Down | KeyCode::Tab => {
                if self.selected + 1 < self.fields().len() {
                    self.selected += 1;
                }
            }
            KeyCode::Left | KeyCode::Right => {
                if self.selected_field() == Field::Units {
                    self.toggle_units();
                }
            }
            KeyCode::Char('u') => self.toggle_units(),
            KeyCode::Char('r') => {
                self.form.reset();
            }
            KeyCode::Enter => {
                if self.selected_field() == Field::Units {
                    self.toggle_units();
                } else if self.form.can_calculate() {
                    // Invalid-but-complete input fails silently: the prior
                    // result stays on screen, matching the form contract.
                    self.form.calculate();
                }
            }
            KeyCode::Backspace => {
                if let Some(text) = self.active_text_mut() {
                    text.pop();
                }
            }
            KeyCode::Char(c) => {
                if c.is_ascii_digit() || c == '.' {
                    if let Some(text) = self.active_text_mut() {
                        text.push(c);
                    }
                }
            }
            _ => {}
        }
        false
    }

    // ========================================================================
    // Rendering
    // ========================================================================

    fn draw(&mut self, frame: &mut ratatui::Frame<'_>) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(3),
            ])
            .split(frame.area());

        self.draw_header(frame, chunks[0]);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[1]);

        self.draw_form(frame, body[0]);
        self.draw_results(frame, body[1]);
        self.draw_footer(frame, chunks[2]);
    }

    fn draw_header(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let title = Paragraph::new(vec![
            Line::from(Span::styled(
                "Health Fit Tracker",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Calculate your BMI and get personalized health recommendations",
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(title, area);
    }

    fn draw_form(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let unit_system = self.form.input.unit_system;
        let mut lines: Vec<Line> = Vec::new();

        for (i, field) in self.fields().iter().enumerate() {
            let selected = i == self.selected;
            let marker = if selected { "> " } else { "  " };
            let label_style = if selected {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };

            lines.push(Line::from(Span::styled(
                format!("{marker}{}", field.label(unit_system)),
                label_style,
            )));

            if *field == Field::Units {
                lines.push(Line::from(vec![
                    Span::raw("    "),
                    unit_button(UnitSystem::Metric, unit_system),
                    Span::raw("  "),
                    unit_button(UnitSystem::Imperial, unit_system),
                ]));
            } else {
                let text = self.field_text(*field);
                let value = if text.is_empty() {
                    Span::styled(
                        field.placeholder(unit_system).to_string(),
                        Style::default().fg(Color::DarkGray),
                    )
                } else {
                    Span::raw(text.to_string())
                };
                let cursor = if selected {
                    Span::styled("_", Style::default().add_modifier(Modifier::SLOW_BLINK))
                } else {
                    Span::raw("")
                };
                lines.push(Line::from(vec![Span::raw("    "), value, cursor]));
            }
            lines.push(Line::from(""));
        }

        let calc_style = if self.form.can_calculate() {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        lines.push(Line::from(vec![
            Span::styled("  [ Enter: Calculate BMI ]", calc_style),
            Span::raw("  "),
            Span::styled("[ r: Reset ]", Style::default().fg(Color::DarkGray)),
        ]));

        let panel = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title("BMI Calculator"),
        );
        frame.render_widget(panel, area);
    }

    fn field_text(&self, field: Field) -> &str {
        match field {
            Field::Units => "",
            Field::Weight => &self.form.input.weight,
            Field::Height => &self.form.input.height,
            Field::Feet => &self.form.input.feet,
            Field::Inches => &self.form.input.inches,
        }
    }

    fn draw_results(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let block = Block::default().borders(Borders::ALL).title("Your Results");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let Some(result) = &self.form.result else {
            let placeholder = Paragraph::new(
                "Enter your measurements and press Enter to see your results",
            )
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
            frame.render_widget(placeholder, inner);
            return;
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(2),
                Constraint::Length(3),
                Constraint::Min(6),
            ])
            .split(inner);

        let color = category_color(result.category);

        let score = Paragraph::new(vec![
            Line::from(Span::styled(
                result.format_score(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "BMI Score",
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(score, chunks[0]);

        let category = Paragraph::new(Line::from(Span::styled(
            result.category.display_name(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(category, chunks[1]);

        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(color))
            .ratio(scale_ratio(result.bmi))
            .label(result.format_score());
        frame.render_widget(gauge, chunks[2]);

        self.draw_detail(frame, chunks[3], result.recommendation.as_str());
    }

    fn draw_detail(&self, frame: &mut ratatui::Frame<'_>, area: Rect, recommendation: &str) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(5)])
            .split(area);

        let advice = Paragraph::new(vec![
            Line::from(Span::styled(
                "Health Recommendation",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(recommendation.to_string()),
        ])
        .wrap(Wrap { trim: true });
        frame.render_widget(advice, chunks[0]);

        let rows: Vec<Row> = CATEGORY_BANDS
            .iter()
            .map(|band| {
                Row::new(vec![
                    Cell::from(band.category.display_name())
                        .style(Style::default().fg(category_color(band.category))),
                    Cell::from(band.range_label()),
                ])
            })
            .collect();

        let table = Table::new(rows, [Constraint::Length(14), Constraint::Length(14)])
            .header(
                Row::new(vec!["Category", "BMI Range"])
                    .style(Style::default().add_modifier(Modifier::BOLD)),
            )
            .block(Block::default().borders(Borders::TOP));
        frame.render_widget(table, chunks[1]);
    }

    fn draw_footer(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let footer = Paragraph::new(vec![
            Line::from(Span::styled(
                "Tab/Up/Down: fields | u: units | Enter: calculate | r: reset | q: quit",
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(Span::styled(
                "BMI is a screening tool and does not diagnose health conditions. \
                 Formula: BMI = weight(kg) / height(m)^2",
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(footer, area);
    }
}

fn unit_button<'a>(system: UnitSystem, active: UnitSystem) -> Span<'a> {
    let style = if system == active {
        Style::default()
            .fg(Color::White)
            .bg(Color::Blue)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };
    Span::styled(format!(" {} ", system.display_name()), style)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_colors() {
        assert_eq!(category_color(BmiCategory::Underweight), Color::Blue);
        assert_eq!(category_color(BmiCategory::Normal), Color::Green);
        assert_eq!(category_color(BmiCategory::Overweight), Color::Yellow);
        assert_eq!(category_color(BmiCategory::Obese), Color::Red);
    }

    #[test]
    fn test_scale_ratio_clamped() {
        assert!((scale_ratio(20.0) - 0.5).abs() < 1e-9);
        assert_eq!(scale_ratio(50.0), 1.0);
        assert_eq!(scale_ratio(-5.0), 0.0);
    }

    #[test]
    fn test_field_list_tracks_unit_system() {
        let mut app = App::new();
        assert_eq!(app.fields().len(), 3);

        app.toggle_units();
        assert_eq!(app.fields().len(), 4);
        assert!(app.fields().contains(&Field::Feet));
    }

    #[test]
    fn test_typing_routes_to_selected_field() {
        let mut app = App::new();
        app.selected = 1; // weight
        app.handle_key(KeyCode::Char('7'));
        app.handle_key(KeyCode::Char('0'));
        app.handle_key(KeyCode::Char('x')); // non-numeric input is ignored
        assert_eq!(app.form.input.weight, "70");

        app.handle_key(KeyCode::Backspace);
        assert_eq!(app.form.input.weight, "7");
    }

    #[test]
    fn test_enter_calculates_only_when_complete() {
        let mut app = App::new();
        app.selected = 1;
        app.handle_key(KeyCode::Char('7'));
        app.handle_key(KeyCode::Char('0'));
        app.handle_key(KeyCode::Enter);
        assert!(app.form.result.is_none());

        app.selected = 2;
        for c in "175".chars() {
            app.handle_key(KeyCode::Char(c));
        }
        app.handle_key(KeyCode::Enter);
        assert_eq!(app.form.result.as_ref().unwrap().bmi, 22.9);
    }
}
