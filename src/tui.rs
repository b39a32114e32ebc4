//! Terminal User Interface for browsing videos by phase
//!
//! Three levels: a menu of phases (empty phases hidden), the videos of the
//! chosen phase, and the per-phase progress of the chosen video.
//! Keyboard only (arrow keys, j/k, Enter, Esc, q) and read-only.

use std::collections::BTreeMap;
use std::io;

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};
use tracing::debug;

use crate::presentation::{
    PHASE_TAG_STYLES, overall_label, progress_tone, tag_icon, tag_tone, uploaded_title,
    video_title,
};
use vidflow_store::LoadedVideos;

use crate::{
    Config, PhaseTag, VideoRecord, all_progress, count_by_phase_at, group_by_phase_at,
    overall_progress,
};

/// Which level of the menu is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Phases,
    Videos,
    Details,
}

/// TUI application state
pub struct TuiApp {
    /// Index file the catalogue was loaded from, shown in the header
    source: String,
    /// Non-empty phase buckets in menu order
    groups: Vec<(PhaseTag, Vec<VideoRecord>)>,
    /// Every phase with its count, including empty ones
    counts: BTreeMap<PhaseTag, usize>,
    total: usize,
    skipped: usize,
    view: View,
    phase_index: usize,
    video_index: usize,
    list_state: ListState,
}

impl TuiApp {
    /// Build the menu from a loaded catalogue.
    #[must_use]
    pub fn from_loaded(source: String, loaded: &LoadedVideos, as_of: NaiveDateTime) -> Self {
        Self::from_videos(source, &loaded.videos, loaded.skipped.len(), as_of)
    }

    /// Build the menu from already loaded videos.
    #[must_use]
    pub fn from_videos(
        source: String,
        videos: &[VideoRecord],
        skipped: usize,
        as_of: NaiveDateTime,
    ) -> Self {
        let counts = count_by_phase_at(videos, as_of);
        let groups: Vec<(PhaseTag, Vec<VideoRecord>)> = group_by_phase_at(videos, as_of)
            .into_iter()
            .map(|(tag, bucket)| (tag, bucket.into_iter().cloned().collect()))
            .collect();

        let mut list_state = ListState::default();
        if !groups.is_empty() {
            list_state.select(Some(0));
        }

        Self {
            source,
            groups,
            counts,
            total: videos.len(),
            skipped,
            view: View::Phases,
            phase_index: 0,
            video_index: 0,
            list_state,
        }
    }

    /// Number of rows in the list currently on screen
    fn row_count(&self) -> usize {
        match self.view {
            View::Phases => self.groups.len(),
            View::Videos | View::Details => self.selected_group().map_or(0, |(_, v)| v.len()),
        }
    }

    fn cursor(&mut self) -> &mut usize {
        match self.view {
            View::Phases => &mut self.phase_index,
            View::Videos | View::Details => &mut self.video_index,
        }
    }

    /// Move selection up
    fn select_previous(&mut self) {
        let rows = self.row_count();
        if rows == 0 || self.view == View::Details {
            return;
        }
        let cursor = self.cursor();
        *cursor = if *cursor > 0 { *cursor - 1 } else { rows - 1 };
        let selected = *cursor;
        self.list_state.select(Some(selected));
    }

    /// Move selection down
    fn select_next(&mut self) {
        let rows = self.row_count();
        if rows == 0 || self.view == View::Details {
            return;
        }
        let cursor = self.cursor();
        *cursor = if *cursor + 1 < rows { *cursor + 1 } else { 0 };
        let selected = *cursor;
        self.list_state.select(Some(selected));
    }

    /// Descend one level
    fn enter(&mut self) {
        match self.view {
            View::Phases if !self.groups.is_empty() => {
                self.view = View::Videos;
                self.video_index = 0;
                self.list_state.select(Some(0));
            }
            View::Videos => self.view = View::Details,
            _ => {}
        }
    }

    /// Go up one level. Returns false when already at the top.
    fn back(&mut self) -> bool {
        match self.view {
            View::Phases => false,
            View::Videos => {
                self.view = View::Phases;
                self.list_state.select(Some(self.phase_index));
                true
            }
            View::Details => {
                self.view = View::Videos;
                true
            }
        }
    }

    fn selected_group(&self) -> Option<&(PhaseTag, Vec<VideoRecord>)> {
        self.groups.get(self.phase_index)
    }

    /// Get the currently selected video
    fn selected_video(&self) -> Option<&VideoRecord> {
        self.selected_group()
            .and_then(|(_, videos)| videos.get(self.video_index))
    }
}

/// Run the TUI application over an already loaded catalogue.
pub fn run_tui(config: &Config, loaded: &LoadedVideos, as_of: NaiveDateTime) -> Result<()> {
    let mut app = TuiApp::from_loaded(config.index_path.to_string(), loaded, as_of);
    debug!(phases = app.groups.len(), videos = app.total, "Starting TUI");

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let result = run_app(&mut terminal, &mut app);

    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main application loop
fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut TuiApp) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            match key.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Up | KeyCode::Char('k') => app.select_previous(),
                KeyCode::Down | KeyCode::Char('j') => app.select_next(),
                KeyCode::Enter | KeyCode::Right | KeyCode::Char('l') => app.enter(),
                KeyCode::Esc | KeyCode::Left | KeyCode::Char('h') => {
                    if !app.back() && key.code == KeyCode::Esc {
                        return Ok(());
                    }
                }
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &TuiApp) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(4), // Summary
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Footer/help
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);
    render_summary(f, app, chunks[1]);
    match app.view {
        View::Phases => render_phase_menu(f, app, chunks[2]),
        View::Videos => render_video_list(f, app, chunks[2]),
        View::Details => render_details(f, app, chunks[2]),
    }
    render_footer(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, app: &TuiApp, area: Rect) {
    let header = Paragraph::new(vec![Line::from(vec![
        Span::styled(
            "vidflow ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("index: "),
        Span::styled(&app.source, Style::default().fg(Color::Yellow)),
    ])])
    .block(Block::default().borders(Borders::ALL).title(" Videos "));

    f.render_widget(header, area);
}

/// Phase histogram, one icon and count per phase
fn render_summary(f: &mut Frame, app: &TuiApp, area: Rect) {
    let mut spans = vec![
        Span::raw("Total: "),
        Span::styled(
            app.total.to_string(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
    ];
    for (tag, icon, tone) in PHASE_TAG_STYLES {
        let count = app.counts.get(&tag).copied().unwrap_or(0);
        let color = if count == 0 {
            Color::DarkGray
        } else {
            tone.tui_color()
        };
        spans.push(Span::raw("  "));
        spans.push(Span::styled(format!("{icon} "), Style::default().fg(color)));
        spans.push(Span::raw(count.to_string()));
    }

    let mut lines = vec![Line::from(spans)];
    if app.skipped > 0 {
        lines.push(Line::from(Span::styled(
            format!("{} record(s) could not be loaded", app.skipped),
            Style::default().fg(Color::Yellow),
        )));
    }

    let summary = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Summary "));
    f.render_widget(summary, area);
}

fn render_phase_menu(f: &mut Frame, app: &TuiApp, area: Rect) {
    if app.groups.is_empty() {
        let empty_text = vec![
            Line::from(Span::styled(
                "No videos indexed",
                Style::default().fg(Color::Yellow),
            )),
            Line::from(""),
            Line::from("Check which index is used with:"),
            Line::from(Span::styled(
                "vidflow config",
                Style::default().fg(Color::Cyan),
            )),
        ];
        let paragraph = Paragraph::new(empty_text)
            .block(Block::default().borders(Borders::ALL).title(" Phases "))
            .alignment(Alignment::Center);
        f.render_widget(paragraph, area);
        return;
    }

    let items: Vec<ListItem> = app
        .groups
        .iter()
        .map(|(tag, videos)| {
            let style = Style::default().fg(tag_tone(*tag).tui_color());
            ListItem::new(Line::from(vec![
                Span::styled(format!("{} ", tag_icon(*tag)), style),
                Span::styled(
                    tag.display_name(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!(" ({})", videos.len()), style),
            ]))
        })
        .collect();

    render_list(f, items, " Phases ", app, area);
}

fn render_video_list(f: &mut Frame, app: &TuiApp, area: Rect) {
    let Some((tag, videos)) = app.selected_group() else {
        return;
    };

    let items: Vec<ListItem> = videos
        .iter()
        .map(|video| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    video_title(video),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!(" [{}]", video.category),
                    Style::default().fg(Color::Blue),
                ),
            ]))
        })
        .collect();

    let title = format!(" {} {} ", tag_icon(*tag), tag.display_name());
    render_list(f, items, &title, app, area);
}

fn render_list(f: &mut Frame, items: Vec<ListItem>, title: &str, app: &TuiApp, area: Rect) {
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title.to_string()))
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    f.render_stateful_widget(list, area, &mut app.list_state.clone());
}

/// Per-phase progress of the selected video
fn render_details(f: &mut Frame, app: &TuiApp, area: Rect) {
    let (Some((tag, _)), Some(video)) = (app.selected_group(), app.selected_video()) else {
        let empty = Paragraph::new("No video selected")
            .block(Block::default().borders(Borders::ALL).title(" Details "));
        f.render_widget(empty, area);
        return;
    };

    let bold = Style::default().add_modifier(Modifier::BOLD);
    let mut lines = vec![
        Line::from(vec![
            Span::styled("Category: ", bold),
            Span::raw(&video.category),
        ]),
        Line::from(vec![
            Span::styled("Phase: ", bold),
            Span::styled(
                format!("{} {}", tag_icon(*tag), tag.display_name()),
                Style::default().fg(tag_tone(*tag).tui_color()),
            ),
        ]),
        Line::from(vec![
            Span::styled("Title: ", bold),
            Span::raw(uploaded_title(video)),
        ]),
        Line::from(vec![
            Span::styled("Date: ", bold),
            Span::raw(if video.date.is_empty() {
                "-"
            } else {
                video.date.as_str()
            }),
        ]),
        Line::from(""),
    ];

    for progress in all_progress(video) {
        lines.push(Line::from(Span::styled(
            format!("  {}", progress.label()),
            Style::default().fg(progress_tone(progress.score).tui_color()),
        )));
    }

    let overall = overall_progress(video);
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("  {}", overall_label(overall)),
        Style::default()
            .fg(progress_tone(overall).tui_color())
            .add_modifier(Modifier::BOLD),
    )));

    let details = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", video_title(video))),
        )
        .wrap(Wrap { trim: true });
    f.render_widget(details, area);
}

fn render_footer(f: &mut Frame, app: &TuiApp, area: Rect) {
    let help_text = match app.view {
        View::Phases => "↑/k: Up  ↓/j: Down  Enter: Open  q: Quit",
        View::Videos => "↑/k: Up  ↓/j: Down  Enter: Progress  Esc: Back  q: Quit",
        View::Details => "Esc: Back  q: Quit",
    };

    let footer = Paragraph::new(help_text)
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL).title(" Help "));

    f.render_widget(footer, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn as_of() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn sample_app() -> TuiApp {
        let idea = VideoRecord::new("Idea", "dev");
        let other_idea = VideoRecord::new("Other idea", "dev");
        let mut published = VideoRecord::new("Argo CD", "devops");
        published.upload_video = "/videos/argo.mp4".to_string();
        published.video_id = "abc123".to_string();

        TuiApp::from_videos(
            "index.yaml".to_string(),
            &[idea, published, other_idea],
            1,
            as_of(),
        )
    }

    #[test]
    fn test_tui_app_creation() {
        let app = sample_app();
        assert_eq!(app.total, 3);
        assert_eq!(app.skipped, 1);
        assert_eq!(app.view, View::Phases);
        assert_eq!(app.counts.len(), 8);
        assert_eq!(app.counts[&PhaseTag::Ideas], 2);
    }

    #[test]
    fn test_empty_phases_hidden() {
        let app = sample_app();
        let tags: Vec<PhaseTag> = app.groups.iter().map(|(t, _)| *t).collect();
        assert_eq!(tags, vec![PhaseTag::Ideas, PhaseTag::Published]);
    }

    #[test]
    fn test_tui_app_navigation() {
        let mut app = sample_app();
        assert_eq!(app.phase_index, 0);

        app.select_next();
        assert_eq!(app.phase_index, 1);

        // wraps to the first phase
        app.select_next();
        assert_eq!(app.phase_index, 0);

        app.select_previous();
        assert_eq!(app.phase_index, 1);
    }

    #[test]
    fn test_enter_and_back() {
        let mut app = sample_app();
        app.enter();
        assert_eq!(app.view, View::Videos);
        app.select_next();
        assert_eq!(app.selected_video().unwrap().name, "Other idea");

        app.enter();
        assert_eq!(app.view, View::Details);
        // selection is frozen in details
        app.select_next();
        assert_eq!(app.video_index, 1);

        assert!(app.back());
        assert_eq!(app.view, View::Videos);
        assert!(app.back());
        assert_eq!(app.view, View::Phases);
        assert!(!app.back());
    }

    #[test]
    fn test_entering_phase_resets_video_cursor() {
        let mut app = sample_app();
        app.enter();
        app.select_next();
        app.back();
        app.select_next();
        app.enter();
        assert_eq!(app.video_index, 0);
        assert_eq!(app.selected_video().unwrap().name, "Argo CD");
    }

    #[test]
    fn test_navigation_with_empty_catalogue() {
        let mut app = TuiApp::from_videos("index.yaml".to_string(), &[], 0, as_of());

        app.select_next();
        assert_eq!(app.phase_index, 0);
        app.select_previous();
        assert_eq!(app.phase_index, 0);

        app.enter();
        assert_eq!(app.view, View::Phases);
        assert!(app.selected_video().is_none());
        assert!(app.counts.values().all(|c| *c == 0));
    }

    #[test]
    fn test_from_loaded_counts_skipped() {
        let mut published = VideoRecord::new("Argo CD", "devops");
        published.upload_video = "/videos/argo.mp4".to_string();
        published.video_id = "abc123".to_string();
        let loaded = LoadedVideos {
            videos: vec![published],
            skipped: vec![(
                crate::IndexEntry::new("Missing", "devops"),
                crate::StoreError::VideoNotFound {
                    path: "manuscript/devops/missing.yaml".to_string(),
                },
            )],
        };

        let app = TuiApp::from_loaded("index.yaml".to_string(), &loaded, as_of());
        assert_eq!(app.total, 1);
        assert_eq!(app.skipped, 1);
        assert_eq!(app.groups[0].0, PhaseTag::Published);
        assert_eq!(app.groups[0].1[0].name, "Argo CD");
    }
}
