// src/gui/panel.rs
//
// One tab: the form state plus the lookup service it talks to.
// Lookups run on a worker thread and come back through `inbox`.

use std::sync::{mpsc, Arc};

use crate::{
    config::WidgetOptions,
    core::Transport,
    error::LookupError,
    lookup::{CertLookup, Outcome},
    widget::Widget,
};

pub type Reply = (u64, Result<Outcome, LookupError>);

pub struct Panel {
    title: String,
    pub lookup: Arc<CertLookup>,
    pub widget: Widget,
    pub outbox: mpsc::Sender<Reply>,
    inbox: mpsc::Receiver<Reply>,
}

impl Panel {
    pub fn new(options: &WidgetOptions, transport: Arc<dyn Transport>) -> Self {
        let (outbox, inbox) = mpsc::channel();
        Self {
            title: s!(options.title()),
            lookup: Arc::new(CertLookup::new(options, transport)),
            widget: Widget::new(),
            outbox,
            inbox,
        }
    }

    pub fn id(&self) -> &str { self.lookup.id() }
    pub fn title(&self) -> &str { &self.title }

    /// Apply any replies that arrived since the last frame.
    pub fn poll(&mut self) {
        while let Ok((ticket, result)) = self.inbox.try_recv() {
            self.widget.finish(ticket, result);
        }
    }
}
