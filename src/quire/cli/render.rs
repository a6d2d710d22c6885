use chrono::{NaiveDate, Utc};
use colored::Colorize;
use quire::api::{CmdMessage, DisplayDiary, MessageLevel};
use quire::config::{QuireConfig, KEYS};
use quire::model::Page;
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 80;
const TIME_WIDTH: usize = 14;
const PAGES_WIDTH: usize = 10;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_diaries(diaries: &[DisplayDiary]) {
    if diaries.is_empty() {
        println!("No diaries found.");
        return;
    }

    for dd in diaries {
        let idx_str = format!("{}. ", dd.index);
        let pages = match dd.diary.pages.len() {
            1 => "1 page".to_string(),
            n => format!("{} pages", n),
        };

        let fixed_width = 4 + idx_str.width() + PAGES_WIDTH + TIME_WIDTH;
        let available = LINE_WIDTH.saturating_sub(fixed_width);
        let name = truncate_to_width(&dd.diary.name, available);
        let padding = available.saturating_sub(name.width());

        println!(
            "    {}{}{}{:>pw$}{}",
            idx_str.yellow(),
            name,
            " ".repeat(padding),
            pages,
            format_last_entry(&dd.diary.last_entry_date).dimmed(),
            pw = PAGES_WIDTH
        );
    }
}

pub(super) fn print_diary(dd: &DisplayDiary, pages: &[Page]) {
    println!("{} {}", format!("{}.", dd.index).yellow(), dd.diary.name.bold());
    for page in pages {
        println!();
        println!(
            "{}",
            format!("--- Page {} · {} ---", page.page_number, page.date).dimmed()
        );
        if page.content.is_empty() {
            println!("{}", "(empty)".dimmed());
        } else {
            println!("{}", page.content);
        }
    }
}

pub(super) fn print_config(config: &QuireConfig) {
    let key_width = KEYS.iter().map(|k| k.width()).max().unwrap_or(0);
    for key in KEYS {
        if let Some(value) = config.get(key) {
            println!("{:<width$} = {}", key, value, width = key_width);
        }
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
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

/// Last entry dates are calendar days; anything unparseable is shown as stored.
fn format_last_entry(date: &str) -> String {
    let Ok(day) = NaiveDate::parse_from_str(date, "%Y-%m-%d") else {
        return format!("{:>width$}", date, width = TIME_WIDTH);
    };
    let today = Utc::now().date_naive();
    let time_str = if day >= today {
        "today".to_string()
    } else {
        let elapsed = (today - day).to_std().unwrap_or_default();
        Formatter::new().convert(elapsed)
    };
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
