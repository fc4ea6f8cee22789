//! Editor document model and the debounce/resync state machine.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
/// Flat editor contents.
pub struct EditorDocument {
    text: String,
}

impl EditorDocument {
    /// Wraps already-flat text.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Flattens a line-chunked representation into one string.
    ///
    /// Each chunk is one line; chunks are joined with `\n`.
    pub fn from_chunks<I, S>(chunks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut text = String::new();
        for (index, chunk) in chunks.into_iter().enumerate() {
            if index > 0 {
                text.push('\n');
            }
            text.push_str(chunk.as_ref());
        }
        Self { text }
    }

    /// Full document text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Consumes the document and returns its text.
    pub fn into_text(self) -> String {
        self.text
    }

    /// Number of editor lines. An empty document still has one line.
    pub fn line_count(&self) -> usize {
        self.text.split('\n').count()
    }

    /// Number of Unicode scalar values in the document.
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Editor lifecycle.
pub enum EditorPhase {
    /// The underlying editor has not been displayed yet.
    Uninitialized,
    /// The editor is constructed and accepting edits and resyncs.
    Ready,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Authoritative replacement text pushed into the editor.
///
/// A sync is applied once per `revision`; repeated or older revisions are ignored.
pub struct EditorSync {
    /// Monotonic revision issued by the owner of the authoritative text.
    pub revision: u64,
    /// Replacement text.
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Change event emitted after the debounce quiet period.
pub struct EditorChange {
    /// Full document text at emission time.
    pub document: EditorDocument,
}

impl EditorChange {
    /// Full document text carried by the change.
    pub fn text(&self) -> &str {
        self.document.text()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Token returned by [`EditorSession::edit`]; only the newest ticket flushes.
pub struct DebounceTicket(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
/// Pure editor state: phase, current document, last applied resync, pending debounce.
pub struct EditorSession {
    phase: EditorPhase,
    document: EditorDocument,
    applied_revision: Option<u64>,
    generation: u64,
    pending: Option<u64>,
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorSession {
    /// Creates an uninitialized session with an empty document.
    pub fn new() -> Self {
        Self {
            phase: EditorPhase::Uninitialized,
            document: EditorDocument::default(),
            applied_revision: None,
            generation: 0,
            pending: None,
        }
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> EditorPhase {
        self.phase
    }

    /// Current document.
    pub fn document(&self) -> &EditorDocument {
        &self.document
    }

    /// Whether an edit is waiting for its quiet period to end.
    pub fn has_pending_change(&self) -> bool {
        self.pending.is_some()
    }

    /// Constructs the editor with its seed text on first display.
    ///
    /// Returns `false` when the editor was already constructed.
    pub fn mount(&mut self, start_text: &str) -> bool {
        if self.phase == EditorPhase::Ready {
            return false;
        }
        self.document = EditorDocument::new(start_text);
        self.phase = EditorPhase::Ready;
        true
    }

    /// Records a user edit and returns the ticket to flush after the quiet period.
    pub fn edit(&mut self, text: impl Into<String>) -> DebounceTicket {
        self.phase = EditorPhase::Ready;
        self.document = EditorDocument::new(text);
        self.generation = self.generation.wrapping_add(1);
        self.pending = Some(self.generation);
        DebounceTicket(self.generation)
    }

    /// Emits the trailing change if `ticket` is still the newest pending edit.
    pub fn flush(&mut self, ticket: DebounceTicket) -> Option<EditorChange> {
        if self.pending != Some(ticket.0) {
            return None;
        }
        self.pending = None;
        Some(EditorChange {
            document: self.document.clone(),
        })
    }

    /// Replaces the content with authoritative text, discarding in-flight edits.
    ///
    /// Returns `false` when `sync` was already applied (or is older than the last one).
    pub fn resync(&mut self, sync: &EditorSync) -> bool {
        if self
            .applied_revision
            .is_some_and(|applied| sync.revision <= applied)
        {
            return false;
        }
        self.applied_revision = Some(sync.revision);
        self.document = EditorDocument::new(sync.text.as_str());
        self.pending = None;
        self.phase = EditorPhase::Ready;
        true
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn chunked_text_is_flattened_line_by_line() {
        let document = EditorDocument::from_chunks(["{", "  \"name\": \"Foo\"", "}"]);
        assert_eq!(document.text(), "{\n  \"name\": \"Foo\"\n}");
        assert_eq!(document.line_count(), 3);
        assert_eq!(document.char_count(), 19);
    }

    #[test]
    fn empty_document_has_one_line() {
        assert_eq!(EditorDocument::default().line_count(), 1);
        assert_eq!(EditorDocument::from_chunks(Vec::<String>::new()).text(), "");
    }

    #[test]
    fn mount_moves_to_ready_once() {
        let mut session = EditorSession::new();
        assert_eq!(session.phase(), EditorPhase::Uninitialized);
        assert!(session.mount("{}"));
        assert_eq!(session.phase(), EditorPhase::Ready);
        assert!(!session.mount("ignored"));
        assert_eq!(session.document().text(), "{}");
    }

    #[test]
    fn rapid_edits_collapse_into_trailing_change() {
        let mut session = EditorSession::new();
        session.mount("");
        let first = session.edit("{");
        let second = session.edit("{\"a\"");
        let third = session.edit("{\"a\":1}");

        assert_eq!(session.flush(first), None);
        assert_eq!(session.flush(second), None);
        assert_eq!(
            session.flush(third).map(|change| change.text().to_string()),
            Some("{\"a\":1}".to_string())
        );
        assert_eq!(session.flush(third), None);
    }

    #[test]
    fn resync_wins_over_pending_edit() {
        let mut session = EditorSession::new();
        session.mount("{}");
        let ticket = session.edit("{\"draft\":true}");
        assert!(session.resync(&EditorSync {
            revision: 1,
            text: "{\"name\":\"Foo\"}".to_string(),
        }));

        assert_eq!(session.flush(ticket), None);
        assert!(!session.has_pending_change());
        assert_eq!(session.document().text(), "{\"name\":\"Foo\"}");
    }

    #[test]
    fn repeated_or_older_resyncs_are_ignored() {
        let mut session = EditorSession::new();
        let sync = EditorSync {
            revision: 4,
            text: "a".to_string(),
        };
        assert!(session.resync(&sync));
        session.edit("edited");
        assert!(!session.resync(&sync));
        assert!(!session.resync(&EditorSync {
            revision: 3,
            text: "b".to_string(),
        }));
        assert_eq!(session.document().text(), "edited");
    }
}
