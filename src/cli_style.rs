use clap::builder::styling::{AnsiColor, Color, Style};
use clap::builder::Styles;
use crossterm::style::{Attribute, Color as CtColor, Stylize};
use unicode_width::UnicodeWidthStr;

use hub_catalog_server::dashboard::Rgb;

// ═══════════════════════════════════════════════════════════════════════════════
// Clap Styles
// ═══════════════════════════════════════════════════════════════════════════════

pub fn get_styles() -> Styles {
    let bold = |color: AnsiColor| Style::new().bold().fg_color(Some(Color::Ansi(color)));
    Styles::styled()
        .usage(bold(AnsiColor::Magenta).underline())
        .header(bold(AnsiColor::Magenta).underline())
        .literal(bold(AnsiColor::Green))
        .invalid(bold(AnsiColor::Red))
        .error(bold(AnsiColor::Red))
        .valid(bold(AnsiColor::Green))
        .placeholder(Style::new().fg_color(Some(Color::Ansi(AnsiColor::BrightBlack))))
}

// ═══════════════════════════════════════════════════════════════════════════════
// Color Palette
// ═══════════════════════════════════════════════════════════════════════════════

pub mod colors {
    use crossterm::style::Color;

    pub const GREEN: Color = Color::Rgb {
        r: 0,
        g: 255,
        b: 136,
    };
    pub const ORANGE: Color = Color::Rgb {
        r: 255,
        g: 165,
        b: 0,
    };
    pub const RED: Color = Color::Rgb {
        r: 255,
        g: 85,
        b: 85,
    };
    pub const DIM: Color = Color::Rgb {
        r: 128,
        g: 128,
        b: 128,
    };
    pub const WHITE: Color = Color::Rgb {
        r: 255,
        g: 255,
        b: 255,
    };
}

/// Terminal color for a theme accent.
pub fn accent(rgb: Rgb) -> CtColor {
    CtColor::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Box Drawing Characters
// ═══════════════════════════════════════════════════════════════════════════════

pub mod box_chars {
    pub const SINGLE_HORIZONTAL: &str = "─";
    pub const SINGLE_VERTICAL: &str = "│";

    pub const ROUND_TOP_LEFT: &str = "╭";
    pub const ROUND_TOP_RIGHT: &str = "╮";
    pub const ROUND_BOTTOM_LEFT: &str = "╰";
    pub const ROUND_BOTTOM_RIGHT: &str = "╯";

    pub const ARROW_RIGHT: &str = "▶";
    pub const BULLET: &str = "●";
    pub const DIAMOND: &str = "◆";
    pub const CHECK: &str = "✓";
    pub const CROSS_MARK: &str = "✗";
}

const SECTION_WIDTH: usize = 60;

// ═══════════════════════════════════════════════════════════════════════════════
// Banner
// ═══════════════════════════════════════════════════════════════════════════════

pub fn print_banner(primary: CtColor, secondary: CtColor) {
    let banner = r#"
    ██╗  ██╗██╗   ██╗██████╗
    ██║  ██║██║   ██║██╔══██╗
    ███████║██║   ██║██████╔╝
    ██╔══██║██║   ██║██╔══██╗
    ██║  ██║╚██████╔╝██████╔╝
    ╚═╝  ╚═╝ ╚═════╝ ╚═════╝
"#;

    // Top half in the primary accent, bottom half in the secondary one
    let lines: Vec<&str> = banner.lines().collect();
    let half = lines.len() / 2;
    for (i, line) in lines.iter().enumerate() {
        let color = if i < half { primary } else { secondary };
        println!("{}", line.with(color).bold());
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Status Indicators
// ═══════════════════════════════════════════════════════════════════════════════

pub fn print_success(message: &str) {
    println!(
        " {} {}",
        box_chars::CHECK.to_string().with(colors::GREEN).bold(),
        message.with(colors::GREEN)
    );
}

pub fn print_error(message: &str) {
    println!(
        " {} {}",
        box_chars::CROSS_MARK.to_string().with(colors::RED).bold(),
        message.with(colors::RED)
    );
}

pub fn print_warning(message: &str) {
    println!(" {}", message.with(colors::ORANGE).bold());
}

// ═══════════════════════════════════════════════════════════════════════════════
// Section Headers
// ═══════════════════════════════════════════════════════════════════════════════

pub fn print_section_header(title: &str, color: CtColor) {
    let title_len = title.width();
    let padding = SECTION_WIDTH.saturating_sub(title_len + 4) / 2;

    println!();
    print!("{}", box_chars::ROUND_TOP_LEFT.with(color));
    print!("{}", box_chars::SINGLE_HORIZONTAL.repeat(padding).with(color));
    print!(" {} ", title.with(color).bold().attribute(Attribute::Italic));
    print!(
        "{}",
        box_chars::SINGLE_HORIZONTAL
            .repeat(SECTION_WIDTH.saturating_sub(title_len + 4 + padding))
            .with(color)
    );
    println!("{}", box_chars::ROUND_TOP_RIGHT.with(color));
}

pub fn print_section_footer(color: CtColor) {
    print!("{}", box_chars::ROUND_BOTTOM_LEFT.with(color));
    print!(
        "{}",
        box_chars::SINGLE_HORIZONTAL.repeat(SECTION_WIDTH).with(color)
    );
    println!("{}", box_chars::ROUND_BOTTOM_RIGHT.with(color));
}

pub fn print_boxed_line(text: &str, border: CtColor, fg: CtColor) {
    let padding = SECTION_WIDTH.saturating_sub(text.width() + 2);
    println!(
        "{} {}{} {}",
        box_chars::SINGLE_VERTICAL.with(border),
        text.with(fg),
        " ".repeat(padding),
        box_chars::SINGLE_VERTICAL.with(border)
    );
}

// ═══════════════════════════════════════════════════════════════════════════════
// List Display
// ═══════════════════════════════════════════════════════════════════════════════

pub fn print_key_value(key: &str, value: &str, color: CtColor) {
    println!(
        "  {} {} {}",
        box_chars::BULLET.with(color),
        format!("{}:", key).with(colors::DIM),
        value.with(colors::WHITE)
    );
}

pub fn print_list_item(item: &str, color: CtColor, indent: usize) {
    let indent_str = "  ".repeat(indent);
    println!(
        "{}{}  {}",
        indent_str,
        box_chars::ARROW_RIGHT.with(color),
        item.with(colors::WHITE)
    );
}

pub fn print_card(id: &str, title: &str, description: &str, status: &str, color: CtColor) {
    println!(
        "  {} {} {}",
        box_chars::DIAMOND.with(color),
        title.with(color).bold(),
        format!("({})", id).with(colors::DIM)
    );
    println!("      {}", description.with(colors::WHITE));
    println!(
        "      {} {}",
        box_chars::BULLET.with(colors::GREEN),
        status.with(colors::GREEN)
    );
}

// ═══════════════════════════════════════════════════════════════════════════════
// Prompt Styling
// ═══════════════════════════════════════════════════════════════════════════════

pub fn get_prompt(primary: CtColor, secondary: CtColor) -> String {
    format!(
        "{}{} ",
        "❯".with(primary).bold(),
        "❯".with(secondary).bold(),
    )
}

pub fn print_goodbye() {
    println!();
    println!(
        "  {} {}",
        "👋".with(colors::WHITE),
        "Goodbye from HaloAI Studios Hub".with(colors::DIM).bold()
    );
    println!();
}
