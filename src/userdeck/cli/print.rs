use colored::Colorize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};
use userdeck::api::{CmdMessage, MessageLevel};
use userdeck::index::DisplayUser;

const NAME_WIDTH: usize = 24;
const EMAIL_WIDTH: usize = 32;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => eprintln!("{}", message.content.yellow()),
            MessageLevel::Error => eprintln!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_users(users: &[DisplayUser]) {
    if users.is_empty() {
        println!("No users found.");
        return;
    }

    let idx_width = users
        .iter()
        .map(|du| format!("{}. ", du.index).width())
        .max()
        .unwrap_or(0);

    for du in users {
        let idx_str = format!("{:>width$}", format!("{}. ", du.index), width = idx_width);
        let name = pad_to_width(&truncate_to_width(&du.user.name, NAME_WIDTH), NAME_WIDTH);
        let email = pad_to_width(&truncate_to_width(&du.user.email, EMAIL_WIDTH), EMAIL_WIDTH);

        println!(
            "  {}{}  {}  {}",
            idx_str.yellow(),
            name.bold(),
            email,
            du.user.avatar_url.dimmed()
        );
    }
}

pub(super) fn print_user_details(users: &[DisplayUser]) {
    for (i, du) in users.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{} {}", format!("{}.", du.index).yellow(), du.user.name.bold());
        println!("--------------------------------");
        println!("{:<8}{}", "id", du.user.id);
        println!("{:<8}{}", "email", du.user.email);
        println!("{:<8}{}", "avatar", du.user.avatar_url);
    }
}

fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}
