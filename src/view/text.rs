//! Plain-text presentation
//!
//! Prints the active page only, followed by the user picker when it is open.

use std::fmt;

use super::{format_timestamp, AdminView, BoardView, HomeView, ModalView, Screen, ScoreboardView};
use crate::controller::Page;

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Screen::Error { message } => writeln!(f, "Error: {}", message),
            Screen::Loading => writeln!(f, "Loading..."),
            Screen::Board(view) => write!(f, "{}", view),
        }
    }
}

impl fmt::Display for BoardView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let nav: Vec<String> = self
            .nav
            .iter()
            .map(|n| {
                if n.active {
                    format!("[{}]", n.label)
                } else {
                    format!(" {} ", n.label)
                }
            })
            .collect();
        writeln!(f, "{}", nav.join(" "))?;
        writeln!(f, "{}", "=".repeat(40))?;

        if let Some(ack) = &self.acknowledgment {
            writeln!(f, "** {} **", ack)?;
            writeln!(f)?;
        }

        match self.active_page {
            Page::Home => write_home(f, &self.home)?,
            Page::Scoreboard => write_scoreboard(f, &self.scoreboard)?,
            Page::Admin => write_admin(f, &self.admin)?,
        }

        if let Some(modal) = &self.modal {
            write_modal(f, modal)?;
        }
        Ok(())
    }
}

fn write_home(f: &mut fmt::Formatter<'_>, home: &HomeView) -> fmt::Result {
    writeln!(f, "Scores")?;
    for card in &home.score_cards {
        writeln!(f, "  {:<20} {:>5} pts", card.name, card.points)?;
    }

    writeln!(f)?;
    writeln!(f, "Quick add")?;
    if home.quick_add.is_empty() {
        writeln!(f, "  (no repeatable chores)")?;
    }
    for button in &home.quick_add {
        writeln!(f, "  #{:<6} {:<20} {:+}", button.chore_id, button.name, button.points)?;
    }

    writeln!(f)?;
    writeln!(f, "Weekly chores")?;
    for list in &home.checklists {
        writeln!(f, "  {}", list.user_name)?;
        if list.items.is_empty() {
            writeln!(f, "    (none)")?;
        }
        for item in &list.items {
            let mark = if item.completed { "x" } else { " " };
            writeln!(
                f,
                "    [{}] #{:<6} {:<20} {} pts",
                mark, item.chore_id, item.name, item.points
            )?;
        }
    }
    Ok(())
}

fn write_scoreboard(f: &mut fmt::Formatter<'_>, board: &ScoreboardView) -> fmt::Result {
    writeln!(f, "Prize: {}", board.prize)?;
    match &board.leader {
        Some(lead) => writeln!(f, "Leader: {} ({} pts)", lead.name, lead.points)?,
        None => writeln!(f, "Leader: -")?,
    }

    for user in &board.histories {
        writeln!(f)?;
        writeln!(f, "{}", user.user_name)?;
        writeln!(f, "{}", "-".repeat(40))?;
        if user.entries.is_empty() {
            writeln!(f, "  No chores completed yet")?;
        }
        for entry in &user.entries {
            writeln!(
                f,
                "  {:<10} {:<20} {:+}",
                format_timestamp(&entry.timestamp),
                entry.chore_name,
                entry.points
            )?;
        }
    }
    Ok(())
}

fn write_admin(f: &mut fmt::Formatter<'_>, admin: &AdminView) -> fmt::Result {
    writeln!(
        f,
        "{:<8} {:<20} {:>6}  {:<10} {}",
        "ID", "Name", "Points", "Type", "Assigned"
    )?;
    writeln!(f, "{}", "-".repeat(60))?;
    for row in &admin.chores {
        writeln!(
            f,
            "{:<8} {:<20} {:>6}  {:<10} {}",
            row.chore_id,
            row.name,
            row.points,
            row.kind,
            row.assigned_to.join(", ")
        )?;
    }

    let form = &admin.add_form;
    if let Some(error) = &form.error {
        writeln!(f)?;
        writeln!(f, "Add chore: {}", error)?;
    }
    Ok(())
}

fn write_modal(f: &mut fmt::Formatter<'_>, modal: &ModalView) -> fmt::Result {
    writeln!(f)?;
    writeln!(f, "Who completed \"{}\"?", modal.chore_name)?;
    for option in &modal.options {
        writeln!(f, "  #{:<6} {}", option.user_id, option.name)?;
    }
    Ok(())
}
