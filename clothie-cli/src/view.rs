//! Plain-text rendering of pages.

use std::fmt::Write;

use clothie_lib::form::{Field, Form, InputKind};
use clothie_lib::pages::{Icon, NavBar, SignupCta, UserPage};
use clothie_lib::validation;

pub fn nav_bar(nav: &NavBar) -> String {
    let mut out = String::new();
    let _ = write!(out, "[{}]", nav.logo.label);
    for link in &nav.main_nav {
        let _ = write!(out, "  {}", link.label);
    }
    out.push_str("  |");
    for link in &nav.user_nav {
        let glyph = match link.icon {
            Some(Icon::Cart) => "cart",
            Some(Icon::Avatar) => "user",
            None => link.label,
        };
        let _ = write!(out, "  ({})", glyph);
    }
    out.push('\n');
    for link in nav.links() {
        let _ = writeln!(out, "  {:<12} {}", link.label, link.route);
    }
    out
}

pub fn field(field: &Field) -> String {
    let shown = match field.kind() {
        InputKind::Password => "*".repeat(field.value().chars().count()),
        _ => field.value().to_string(),
    };
    let marker = if field.is_valid() { "ok" } else { "--" };
    let mut line = format!("  [{}] {:<20} {}", marker, field.label(), shown);
    if field.is_read_only() {
        line.push_str("  (read-only)");
    }
    if let Some(error) = field.error_text() {
        let _ = write!(line, "\n       {}", error);
    } else if field.is_touched() && !field.is_valid() {
        let needs: Vec<String> = validation::failing(field.value(), field.validators())
            .iter()
            .map(ToString::to_string)
            .collect();
        let _ = write!(line, "\n       needs: {}", needs.join(", "));
    }
    line
}

pub fn form(form: &Form) -> String {
    form.fields().iter().map(field).collect::<Vec<_>>().join("\n")
}

pub fn signup(cta: &SignupCta) -> String {
    let button = if cta.form().is_valid() { "enabled" } else { "disabled" };
    format!(
        "{}\n{}\n  <{}> ({})\n",
        SignupCta::TITLE,
        form(cta.form()),
        SignupCta::SUBMIT_LABEL,
        button
    )
}

pub fn user(page: &UserPage) -> String {
    if page.is_loading() {
        return "  loading...\n".to_string();
    }
    let button = if page.can_submit() { "enabled" } else { "disabled" };
    format!(
        "{}\n{}\n  <{}> ({})\n",
        UserPage::CATALOG.join(" | "),
        form(page.form()),
        UserPage::SUBMIT_LABEL,
        button
    )
}

pub fn error_dialog(message: &str) -> String {
    format!("!! {}\n", message)
}
