#![forbid(unsafe_code)]

//! Seamline widget showcase.
//!
//! Prints every widget once, configured from the environment, so the output
//! can be eyeballed in a terminal or diffed between versions.
//!
//! ```sh
//! cargo run -p seamline-demo -- --width 100 --section tabs
//! SEAMLINE_COLOR=never SEAMLINE_BORDER=double cargo run -p seamline-demo
//! SEAMLINE_LOG=seamline_widgets=debug cargo run -p seamline-demo
//! ```

use std::fmt::Write as _;

use seamline::prelude::*;
use seamline::widgets::status_bar::{common_key_bindings, profile_status_items};
use seamline::{StatusMessage, VerticalAlignment, join_horizontal, stack_vertical, write_widget};

const DEFAULT_WIDTH: usize = 80;

/// Which part of the showcase to print.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    All,
    Tabs,
    Cards,
    Inputs,
    Status,
    Modal,
    Empty,
}

impl Section {
    const ALL: [Self; 7] = [
        Self::All,
        Self::Tabs,
        Self::Cards,
        Self::Inputs,
        Self::Status,
        Self::Modal,
        Self::Empty,
    ];

    fn name(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Tabs => "tabs",
            Self::Cards => "cards",
            Self::Inputs => "inputs",
            Self::Status => "status",
            Self::Modal => "modal",
            Self::Empty => "empty",
        }
    }

    fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.name() == value)
    }

    fn includes(self, other: Self) -> bool {
        self == Self::All || self == other
    }
}

fn arg_value(flag: &str) -> Option<String> {
    std::env::args().skip_while(|a| a != flag).nth(1)
}

fn extension_cards(theme: Theme, width: usize) -> Vec<Card> {
    let specs = [
        ("🧩", "Markdown Assistant", "v1.2.0", "Formats and previews Markdown", "octo"),
        ("🔧", "Git Helpers", "v0.9.4", "Branch, stash and rebase shortcuts", "hubot"),
        ("📦", "Package Tools", "v2.0.0", "Dependency audits for every manifest", "mona"),
    ];
    specs
        .iter()
        .enumerate()
        .map(|(i, (icon, title, version, description, author))| {
            let mut card = Card::new(theme);
            card.set_icon(*icon)
                .set_title(*title)
                .set_subtitle(*version)
                .set_description(*description)
                .add_metadata(MetadataItem::new("Author", *author))
                .set_width(width)
                .set_active(i == 0)
                .set_selected(i == 1);
            card
        })
        .collect()
}

fn tabs_section(out: &mut String, theme: Theme, width: usize) -> Result<()> {
    let mut bar = TabBar::new(theme);
    bar.set_tabs(vec![
        Tab::new("extensions", "Extensions").icon("🧩"),
        Tab::new("profiles", "Profiles").icon("👤"),
        Tab::new("settings", "Settings").icon("⚙\u{FE0F}"),
        Tab::new("help", "Help").icon("❓"),
    ])
    .set_width(width);

    let card_width = (width.saturating_sub(6) / 2).max(20);
    let cards = extension_cards(theme, card_width);
    let left = cards[0].render();
    let right = cards[1].render();
    let content = join_horizontal(&[&left, &right], VerticalAlignment::Top);
    // Panel rows: content plus two padding rows and the bottom border.
    let panel_height = content.split('\n').count() + 3;
    writeln!(out, "{}", bar.render_with_content(&content, panel_height))?;
    Ok(())
}

fn cards_section(out: &mut String, theme: Theme, width: usize) -> Result<()> {
    let blocks: Vec<String> = extension_cards(theme, width)
        .iter()
        .map(|card| card.render_compact())
        .collect();
    let refs: Vec<&str> = blocks.iter().map(String::as_str).collect();
    writeln!(out, "{}", stack_vertical(&refs))?;
    Ok(())
}

fn inputs_section(out: &mut String, theme: Theme, width: usize) -> Result<()> {
    let mut search = SearchField::new(theme);
    search.set_width(width).focus().set_value("markdown");

    let mut name = FormField::new(theme, "Profile name", FieldKind::Text);
    name.set_required(true)
        .set_placeholder("e.g. work")
        .set_help("Shown in the status bar")
        .set_focused(true)
        .set_width(width.saturating_sub(16));
    // Empty and required: shows the stored error below the field.
    let _ = name.validate();

    let mut default = FormField::new(theme, "Default", FieldKind::Checkbox);
    default.set_checked(true).set_width(width.saturating_sub(16));

    write_widget(out, &search)?;
    writeln!(out, "{}", name.render_inline(14))?;
    writeln!(out, "{}", default.render_inline(14))?;
    Ok(())
}

fn status_section(out: &mut String, theme: Theme, width: usize) -> Result<()> {
    let mut bar = StatusBar::new(theme);
    bar.set_width(width)
        .set_left_items(&profile_status_items("work", 3, 5))
        .set_message(StatusMessage::info("Synced").with_details("2 updated"))
        .set_key_bindings(&common_key_bindings());
    write_widget(out, &bar)
}

fn modal_section(out: &mut String, theme: Theme, width: usize) -> Result<()> {
    let mut modal = Modal::preset(theme, ModalPreset::Alert);
    modal
        .set_icon("⚠\u{FE0F}")
        .set_title("Remove extension?")
        .set_content("Markdown Assistant will be disabled\nin every profile.")
        .set_footer("y confirm • n cancel")
        .set_viewport(width, 16);
    write_widget(out, &modal)
}

fn empty_section(out: &mut String, theme: Theme, width: usize) -> Result<()> {
    let mut state = EmptyState::no_items_found(theme);
    state
        .set_action("Press / to search again")
        .set_width(width)
        .set_centered(true);
    write_widget(out, &state)
}

fn main() {
    let _ = seamline::logging::init();

    let config = Config::detect();
    let theme = config.theme();
    let width = arg_value("--width")
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_WIDTH);
    let section = match arg_value("--section") {
        None => Section::All,
        Some(name) => match Section::parse(&name) {
            Some(section) => section,
            None => {
                let names: Vec<&str> = Section::ALL.iter().map(|s| s.name()).collect();
                eprintln!("unknown section {name:?}; expected one of {}", names.join(", "));
                std::process::exit(2);
            }
        },
    };
    tracing::info!(width, section = section.name(), "rendering showcase");

    match render(section, theme, width) {
        Ok(out) => print!("{out}"),
        Err(err) => {
            eprintln!("Render error: {err}");
            std::process::exit(1);
        }
    }
}

type SectionFn = fn(&mut String, Theme, usize) -> Result<()>;

fn render(section: Section, theme: Theme, width: usize) -> Result<String> {
    let sections: [(Section, SectionFn); 6] = [
        (Section::Tabs, tabs_section),
        (Section::Cards, cards_section),
        (Section::Inputs, inputs_section),
        (Section::Status, status_section),
        (Section::Modal, modal_section),
        (Section::Empty, empty_section),
    ];
    let mut out = String::new();
    for (kind, write) in sections {
        if section.includes(kind) {
            write(&mut out, theme, width)?;
        }
    }
    Ok(out)
}
