// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Graphedit-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Graphedit and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Editing session: one graph view, its gesture controller, and the document it came from.

use std::fmt;

use crate::interaction::{InteractionController, InteractionOutcome, PointerEvent};
use crate::model::Graph;
use crate::store::{GraphFile, StoreError};
use crate::view::{GraphView, ViewConfig};

#[derive(Debug)]
pub enum EditorError {
    /// A press is still waiting for its release; the graph cannot be swapped underneath it.
    GestureInProgress,
    /// Save was requested but the session has no document path.
    NoDocument,
    Store(StoreError),
}

impl fmt::Display for EditorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GestureInProgress => f.write_str("cannot load while a gesture is in progress"),
            Self::NoDocument => f.write_str("no document to save to"),
            Self::Store(source) => write!(f, "{source}"),
        }
    }
}

impl std::error::Error for EditorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Store(source) => Some(source),
            Self::GestureInProgress | Self::NoDocument => None,
        }
    }
}

impl From<StoreError> for EditorError {
    fn from(source: StoreError) -> Self {
        Self::Store(source)
    }
}

#[derive(Debug, Clone)]
pub struct Editor {
    view: GraphView,
    controller: InteractionController,
    document: Option<GraphFile>,
    config: ViewConfig,
}

impl Editor {
    pub fn new(graph: Graph) -> Self {
        Self::with_config(graph, ViewConfig::default())
    }

    pub fn with_config(graph: Graph, config: ViewConfig) -> Self {
        Self {
            view: GraphView::with_config(graph, config),
            controller: InteractionController::new(),
            document: None,
            config,
        }
    }

    pub fn with_document(mut self, document: GraphFile) -> Self {
        self.document = Some(document);
        self
    }

    /// Loads `document`, or starts an empty graph bound to it when the file does not exist yet.
    pub fn open_or_new(document: GraphFile, config: ViewConfig) -> Result<Self, EditorError> {
        let graph = match document.load() {
            Ok(graph) => graph,
            Err(StoreError::NotFound { path }) => {
                tracing::info!(path = %path.display(), "starting new graph");
                Graph::new()
            }
            Err(err) => return Err(err.into()),
        };
        Ok(Self::with_config(graph, config).with_document(document))
    }

    pub fn view(&self) -> &GraphView {
        &self.view
    }

    pub fn graph(&self) -> &Graph {
        self.view.graph()
    }

    pub fn controller(&self) -> &InteractionController {
        &self.controller
    }

    pub fn document(&self) -> Option<&GraphFile> {
        self.document.as_ref()
    }

    pub fn handle_pointer(&mut self, event: PointerEvent) -> InteractionOutcome {
        self.controller.handle(&mut self.view, event)
    }

    pub fn select_next(&mut self) -> InteractionOutcome {
        self.controller.select_next(&mut self.view)
    }

    pub fn clear_selection(&mut self) -> InteractionOutcome {
        self.controller.clear_selection(&mut self.view)
    }

    pub fn selected_text(&self) -> Option<&str> {
        self.controller.selected_text(&self.view)
    }

    pub fn sync_text_field(&mut self, new_value: &str) -> bool {
        self.controller.sync_text_field(&mut self.view, new_value)
    }

    /// Replaces the session's graph with the contents of `document`.
    ///
    /// Refused while a gesture is in progress. On any failure the current graph and view are
    /// left exactly as they were.
    pub fn load(&mut self, document: GraphFile) -> Result<(), EditorError> {
        if self.controller.gesture_in_progress() {
            tracing::warn!(path = %document.path().display(), "load refused mid-gesture");
            return Err(EditorError::GestureInProgress);
        }

        let graph = document.load().map_err(|err| {
            tracing::warn!(error = %err, "graph load failed");
            EditorError::Store(err)
        })?;

        self.view = GraphView::with_config(graph, self.config);
        self.controller.reset();
        self.document = Some(document);
        Ok(())
    }

    /// Loads the current document again, discarding unsaved edits.
    pub fn reload(&mut self) -> Result<(), EditorError> {
        let document = self.document.clone().ok_or(EditorError::NoDocument)?;
        self.load(document)
    }

    pub fn save(&self) -> Result<(), EditorError> {
        let document = self.document.as_ref().ok_or(EditorError::NoDocument)?;
        document.save(self.view.graph()).map_err(|err| {
            tracing::warn!(error = %err, "graph save failed");
            EditorError::Store(err)
        })
    }

    /// Saves to `document` and makes it the session's document on success.
    pub fn save_as(&mut self, document: GraphFile) -> Result<(), EditorError> {
        document.save(self.view.graph())?;
        self.document = Some(document);
        Ok(())
    }
}
