//! Feature views
//!
//! The dashboard's feature screens (metrics, peers, explorer records,
//! visualizer, mana, conflicts, tips, chat) are separate components. The
//! shell only needs them to satisfy [`MountedView`]. Until a real one is
//! plugged in, each route mounts a [`FeatureView`] that names what it shows
//! and echoes the identifier it was given.

use crate::router::{RouteMatch, ViewId};
use crate::tui::theme::Theme;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// What a view may read while rendering
pub struct ViewContext<'a> {
    pub theme: &'a Theme,
    pub connected: bool,
}

/// Contract every routed view satisfies
pub trait MountedView {
    fn title(&self) -> String;

    fn render(&self, f: &mut Frame, area: Rect, ctx: &ViewContext);
}

/// Build the view for a resolved route. Only the route-matched identifier
/// is handed over.
pub fn mount(found: &RouteMatch) -> Box<dyn MountedView> {
    Box::new(FeatureView {
        view: found.view,
        identifier: found.params.first().map(str::to_string),
    })
}

pub struct FeatureView {
    view: ViewId,
    identifier: Option<String>,
}

impl FeatureView {
    fn summary(&self) -> &'static str {
        match self.view {
            ViewId::Dashboard => "Node status, blocks per second, component counters and rate setter metrics.",
            ViewId::Neighbors => "Connected peers with their traffic counters.",
            ViewId::Explorer => "Latest blocks. Search by block, transaction, output, conflict or address identifier.",
            ViewId::ExplorerBlock => "Block record: issuer, parents, payload and booking metadata.",
            ViewId::ExplorerAddress => "Address record: unspent outputs and balances.",
            ViewId::ExplorerTransaction => "Transaction record: inputs, outputs and unlock blocks.",
            ViewId::ExplorerOutput => "Output record: owner, amount and consumers.",
            ViewId::ExplorerConflict => "Conflict record: conflicting members, parents and weight.",
            ViewId::Explorer404 => "Nothing on the node matches this search.",
            ViewId::Visualizer => "Live graph of incoming blocks and their references.",
            ViewId::Mana => "Access and consensus mana distribution across nodes.",
            ViewId::Conflicts => "Open and resolved conflicts with confirmation state.",
            ViewId::Tips => "Current tip pool and tip selection activity.",
            ViewId::Chat => "Chat payloads issued on the network.",
        }
    }
}

impl MountedView for FeatureView {
    fn title(&self) -> String {
        match &self.identifier {
            Some(id) => format!("{} {}", self.view.name(), id),
            None => self.view.name().to_string(),
        }
    }

    fn render(&self, f: &mut Frame, area: Rect, ctx: &ViewContext) {
        let theme = ctx.theme;
        let mut lines = vec![Line::from(Span::styled(
            self.summary(),
            Style::default().fg(theme.foreground),
        ))];

        if let Some(id) = &self.identifier {
            let label = if self.view.is_record() { "id" } else { "search" };
            lines.push(Line::default());
            lines.push(Line::from(vec![
                Span::styled(format!("{}: ", label), Style::default().fg(theme.muted)),
                Span::styled(id.clone(), Style::default().add_modifier(Modifier::BOLD)),
            ]));
        }

        if !ctx.connected {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                "Waiting for the node feed; data will appear once connected.",
                Style::default().fg(theme.muted),
            )));
        }

        let block = Block::default()
            .title(format!(" {} ", self.title()))
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(theme.border_style());

        f.render_widget(
            Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
            area,
        );
    }
}
