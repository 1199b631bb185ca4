//! TUI layout and rendering with ratatui.
//!
//! # Overview
//!
//! This module renders one screen per route:
//! - Landing hero with the student/alumni feature lists
//! - Login and registration forms with inline validation messages
//! - Role-tagged dashboard with overview cards
//! - 404 screen for unknown routes
//!
//! Every frame draws a header, the route content and a footer with the
//! key hints for the current screen. Rendering is pure: nothing here
//! mutates the [`App`].

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
    Frame,
};

use super::app::App;
use crate::forms::confirm_hint;
use crate::password;
use crate::routes::{guard, GuardDecision, Route};

/// Hero tagline on the landing screen.
const TAGLINE: &str = "Bridging Students and Alumni for Career Growth";

/// Feature list shown under "For Students".
const STUDENT_FEATURES: &[&str] = &[
    "Connect with verified alumni",
    "Book structured mentorship sessions",
    "Access curated job opportunities",
    "Track placement activities",
    "Build professional network",
];

/// Feature list shown under "For Alumni".
const ALUMNI_FEATURES: &[&str] = &[
    "Post job openings",
    "Offer mentorship slots",
    "Engage with students professionally",
    "Expand institutional network",
    "Track mentorship impact",
];

/// Dashboard overview cards: title and description.
const DASHBOARD_CARDS: &[(&str, &str)] = &[
    ("Profile", "View and manage your profile information."),
    ("Connections", "Discover and connect with alumni and students."),
    ("Opportunities", "Explore career opportunities and mentorship."),
];

/// Render the TUI based on current application state.
///
/// This is the main entry point for rendering. It dispatches to
/// route-specific rendering functions, consulting the guard so a
/// not-yet-hydrated auth context shows a placeholder instead of a
/// guarded screen.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Main layout: header, content, footer
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(area);

    render_header(frame, app, chunks[0]);

    match guard(app.route(), app.auth()) {
        GuardDecision::Pending => render_pending(frame, app, chunks[1]),
        _ => match app.route() {
            Route::Landing => render_landing(frame, app, chunks[1]),
            Route::Login | Route::SignupStudent | Route::SignupAlumni => {
                render_form(frame, app, chunks[1]);
            }
            Route::Dashboard => render_dashboard(frame, app, chunks[1]),
            Route::NotFound => render_not_found(frame, app, chunks[1]),
        },
    }

    render_footer(frame, app, chunks[2]);

    if app.error_message().is_some() {
        render_error_dialog(frame, app, area);
    }
}

/// Render the header with the product name and current screen.
fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let theme = app.theme();
    let screen = match app.route() {
        Route::Landing => "",
        Route::Login => " [Sign In]",
        Route::SignupStudent => " [Student Registration]",
        Route::SignupAlumni => " [Alumni Registration]",
        Route::Dashboard => " [Dashboard]",
        Route::NotFound => " [404]",
    };

    let title = Paragraph::new(format!("AlumNext{screen}"))
        .style(
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.primary)),
        );
    frame.render_widget(title, area);
}

/// Render the footer with the key hints for the current screen.
fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let theme = app.theme();
    let hints: &[(&str, &str)] = if app.error_message().is_some() {
        &[("Esc", "dismiss")]
    } else {
        match app.route() {
            Route::Landing => &[
                ("l", "login"),
                ("s", "student signup"),
                ("a", "alumni signup"),
                ("d", "dashboard"),
                ("q", "quit"),
            ],
            Route::Login | Route::SignupStudent | Route::SignupAlumni => &[
                ("Tab/\u{2191}\u{2193}", "fields"),
                ("Enter", "submit"),
                ("Esc", "back"),
            ],
            Route::Dashboard => &[("o", "logout"), ("q", "quit")],
            Route::NotFound => &[("Enter", "back to home"), ("q", "quit")],
        }
    };

    let mut spans = Vec::new();
    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  ", Style::default()));
        }
        spans.push(Span::styled(
            *key,
            Style::default()
                .fg(theme.secondary)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!(" {desc}"),
            Style::default().fg(theme.dim),
        ));
    }

    let footer = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, area);
}

/// Placeholder while the session store has not been consulted yet.
fn render_pending(frame: &mut Frame, app: &App, area: Rect) {
    let theme = app.theme();
    let text = Paragraph::new("Loading...")
        .style(Style::default().fg(theme.dim))
        .alignment(Alignment::Center);
    frame.render_widget(text, centered_rect(40, 20, area));
}

/// Render the landing hero and the two feature columns.
fn render_landing(frame: &mut Frame, app: &App, area: Rect) {
    let theme = app.theme();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(0)])
        .split(area);

    let hero = Paragraph::new(vec![
        Line::from(Span::styled(
            "AlumNext",
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(TAGLINE, Style::default().fg(theme.normal))),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(hero, chunks[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    render_feature_list(frame, app, columns[0], "For Students", STUDENT_FEATURES);
    render_feature_list(frame, app, columns[1], "For Alumni", ALUMNI_FEATURES);
}

fn render_feature_list(frame: &mut Frame, app: &App, area: Rect, title: &str, items: &[&str]) {
    let theme = app.theme();
    let list_items: Vec<ListItem> = items
        .iter()
        .map(|item| {
            ListItem::new(Line::from(vec![
                Span::styled("- ", Style::default().fg(theme.primary)),
                Span::styled(*item, Style::default().fg(theme.normal)),
            ]))
        })
        .collect();

    let list = List::new(list_items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.dim))
            .title(Span::styled(
                title.to_string(),
                Style::default()
                    .fg(theme.primary)
                    .add_modifier(Modifier::BOLD),
            )),
    );
    frame.render_widget(list, area);
}

/// Render the active form with inline errors, the live strength label
/// and the confirm-password hint.
fn render_form(frame: &mut Frame, app: &App, area: Rect) {
    let theme = app.theme();
    let title = match app.route() {
        Route::Login => "Student / Alumni Login",
        Route::SignupStudent => "Student Registration",
        Route::SignupAlumni => "Alumni Registration",
        _ => "",
    };

    let mut lines: Vec<Line> = Vec::new();
    if app.route() == Route::Login {
        lines.push(Line::from(Span::styled(
            "Sign in to your AlumNext account",
            Style::default().fg(theme.dim),
        )));
        lines.push(Line::from(""));
    }

    for (i, field) in app.fields().iter().enumerate() {
        let focused = i == app.focus();
        let label = field_label(field);
        let raw = app.field_value(field);
        let shown = if is_masked(field) { mask(&raw) } else { raw };

        let marker = if focused { "> " } else { "  " };
        let label_style = if focused {
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.dim)
        };
        let value_style = if focused {
            Style::default()
                .fg(theme.normal)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.normal)
        };

        let mut spans = vec![
            Span::styled(marker, label_style),
            Span::styled(format!("{label}: "), label_style),
            Span::styled(shown, value_style),
        ];
        if focused {
            spans.push(Span::styled("_", Style::default().fg(theme.primary)));
        }
        lines.push(Line::from(spans));

        if let Some(message) = app.errors().get(field) {
            lines.push(Line::from(Span::styled(
                format!("    {message}"),
                Style::default().fg(theme.danger),
            )));
        }

        if *field == "password" && app.route() != Route::Login {
            if let Some(line) = strength_line(app) {
                lines.push(line);
            }
        }
        if *field == "confirm_password" && !app.errors().contains_key("confirm_password") {
            // Live hint, independent of submit-time errors
            if let Some(hint) = confirm_hint(app.active_password(), app.active_confirm_password())
            {
                lines.push(Line::from(Span::styled(
                    format!("    {hint}"),
                    Style::default().fg(theme.danger),
                )));
            }
        }
    }

    let form = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.dim))
            .title(Span::styled(
                title,
                Style::default()
                    .fg(theme.primary)
                    .add_modifier(Modifier::BOLD),
            )),
    );
    frame.render_widget(form, centered_rect(70, 90, area));
}

/// The live password strength label, colored by level.
fn strength_line(app: &App) -> Option<Line<'static>> {
    let theme = app.theme();
    let strength = password::strength(app.active_password());
    if strength.level == 0 {
        return None;
    }
    let color = match strength.level {
        1 => theme.danger,
        2 => theme.secondary,
        _ => theme.success,
    };
    Some(Line::from(vec![
        Span::styled("    Strength: ", Style::default().fg(theme.dim)),
        Span::styled(
            strength.label,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
    ]))
}

/// Render the role-tagged dashboard with overview cards.
fn render_dashboard(frame: &mut Frame, app: &App, area: Rect) {
    let theme = app.theme();
    let Some(session) = app.auth().session() else {
        // Unreachable behind the guard; render nothing rather than panic
        return;
    };

    let role_title = match session.role {
        crate::auth::Role::Student => "Student Dashboard",
        crate::auth::Role::Alumni => "Alumni Dashboard",
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(0)])
        .split(area);

    let heading = Paragraph::new(vec![
        Line::from(Span::styled(
            role_title,
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Welcome to your dashboard. Here's an overview of your activity.",
            Style::default().fg(theme.dim),
        )),
        Line::from(Span::styled(
            format!(
                "Signed in as {} <{}>",
                session.user.name, session.user.email
            ),
            Style::default().fg(theme.normal),
        )),
    ]);
    frame.render_widget(heading, chunks[0]);

    let card_areas = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(33),
            Constraint::Percentage(34),
        ])
        .split(chunks[1]);

    for (i, (title, description)) in DASHBOARD_CARDS.iter().enumerate() {
        let card = Paragraph::new(*description)
            .wrap(Wrap { trim: true })
            .style(Style::default().fg(theme.normal))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.dim))
                    .title(Span::styled(
                        *title,
                        Style::default()
                            .fg(theme.secondary)
                            .add_modifier(Modifier::BOLD),
                    )),
            );
        frame.render_widget(card, card_areas[i]);
    }
}

/// Render the 404 screen.
fn render_not_found(frame: &mut Frame, app: &App, area: Rect) {
    let theme = app.theme();
    let text = Paragraph::new(vec![
        Line::from(Span::styled(
            "404",
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "The page you're looking for doesn't exist.",
            Style::default().fg(theme.normal),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Back to Home (Enter)",
            Style::default().fg(theme.secondary),
        )),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(text, centered_rect(60, 40, area));
}

/// Render the fatal-overlay dialog above everything else.
fn render_error_dialog(frame: &mut Frame, app: &App, area: Rect) {
    let theme = app.theme();
    let Some(message) = app.error_message() else {
        return;
    };

    let dialog_area = centered_rect(60, 25, area);
    frame.render_widget(Clear, dialog_area);

    let dialog = Paragraph::new(message.to_string())
        .wrap(Wrap { trim: true })
        .style(Style::default().fg(theme.normal))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.danger))
                .title(Span::styled(
                    "Error",
                    Style::default()
                        .fg(theme.danger)
                        .add_modifier(Modifier::BOLD),
                )),
        );
    frame.render_widget(dialog, dialog_area);
}

/// Human-readable label for a form field.
#[must_use]
pub fn field_label(field: &str) -> &'static str {
    match field {
        "identifier" => "Email ID or Username",
        "full_name" => "Full Name",
        "username" => "Username",
        "roll_number" => "Roll Number",
        "branch" => "Branch",
        "year" => "Year",
        "year_of_passing" => "Year of Passing",
        "job_profile" => "Job Profile",
        "company" => "Company",
        "linked_in" => "LinkedIn Profile (optional)",
        "email" => "Email",
        "phone" => "Phone",
        "profile_file" => "Profile Picture (optional)",
        "password" => "Password",
        "confirm_password" => "Confirm Password",
        _ => "",
    }
}

/// Whether a field renders masked.
fn is_masked(field: &str) -> bool {
    field == "password" || field == "confirm_password"
}

/// Mask a secret for display, one bullet per character.
#[must_use]
pub fn mask(value: &str) -> String {
    "\u{2022}".repeat(value.chars().count())
}

/// Create a centered rect using percentages of the available area.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
