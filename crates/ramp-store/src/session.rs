//! One user's working state: the store, the export selection and the
//! optional remote.
//!
//! UI code drives a [`Session`] by calling its methods and rendering what
//! they return. The selection is reconciled against the store after every
//! reload and every delete, so it never holds stale names afterwards.

use crate::codec;
use crate::export;
use crate::filter::{self, FilterCriteria};
use crate::model::Palette;
use crate::selection::Selection;
use crate::store::{LoadReport, PaletteStore};
use crate::sync::{NoRemote, RemoteSync};
use ramp_common::StoreError;
use tracing::{debug, error, info, warn};

pub struct Session {
    store: PaletteStore,
    selection: Selection,
    remote: Box<dyn RemoteSync>,
}

impl Session {
    pub fn new(store: PaletteStore) -> Self {
        Self::with_remote(store, Box::new(NoRemote))
    }

    pub fn with_remote(store: PaletteStore, remote: Box<dyn RemoteSync>) -> Self {
        Self {
            store,
            selection: Selection::new(),
            remote,
        }
    }

    pub fn store(&self) -> &PaletteStore {
        &self.store
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// All palettes, from the store cache when possible.
    pub fn palettes(&mut self) -> Result<&[Palette], StoreError> {
        self.store.load()
    }

    pub fn load_report(&self) -> LoadReport {
        self.store.last_report()
    }

    /// Re-read the document and drop selected names that vanished.
    pub fn reload(&mut self) -> Result<&[Palette], StoreError> {
        let palettes = self.store.reload()?;
        let dropped = self
            .selection
            .reconcile(palettes.iter().map(|p| p.name.as_str()));
        if dropped > 0 {
            info!(dropped, "selection reconciled after reload");
        }
        Ok(palettes)
    }

    /// Palettes matching `criteria`, in store order.
    pub fn visible(&mut self, criteria: &FilterCriteria) -> Result<Vec<&Palette>, StoreError> {
        Ok(filter::filter(self.store.load()?, criteria))
    }

    pub fn toggle(&mut self, name: &str) -> bool {
        let selected = self.selection.toggle(name);
        debug!(name, selected, "toggled selection");
        selected
    }

    pub fn bulk_replace<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selection.bulk_replace(names);
    }

    /// Add everything currently matching `criteria` to the selection.
    pub fn select_all_visible(&mut self, criteria: &FilterCriteria) -> Result<(), StoreError> {
        let palettes = self.store.load()?;
        let visible = filter::filter(palettes, criteria);
        self.selection
            .select_all(visible.iter().map(|p| p.name.as_str()));
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Selected palettes in store order.
    pub fn exported(&mut self) -> Result<Vec<&Palette>, StoreError> {
        let palettes = self.store.load()?;
        Ok(export::export_selection(palettes, &self.selection))
    }

    /// The selection as a JSON bundle.
    pub fn export_bundle(&mut self) -> Result<String, StoreError> {
        let exported = self.exported()?;
        export::bundle_json(&exported)
    }

    /// Color table for one palette, `None` if no palette has that name.
    pub fn color_table(&mut self, name: &str) -> Result<Option<String>, StoreError> {
        Ok(self
            .store
            .load()?
            .iter()
            .find(|p| p.name == name)
            .map(|p| codec::to_color_table(&p.colors)))
    }

    /// Delete `name` from the store, push to the remote, reconcile the
    /// selection. Returns whether a palette was removed.
    ///
    /// If the remote push fails the previous document is put back and the
    /// error returned; store and selection then look as if nothing happened.
    pub fn delete(&mut self, name: &str) -> Result<bool, StoreError> {
        let snapshot = if self.remote.is_configured() {
            Some(self.store.snapshot()?)
        } else {
            None
        };

        let before = self.store.load()?.len();
        let remaining = self.store.delete(name)?;
        let removed = remaining.len() < before;

        if removed {
            if let Some(snapshot) = snapshot {
                if let Err(e) = self.remote.push(self.store.path()) {
                    warn!(name, "remote sync failed, restoring previous document: {e}");
                    if let Err(restore_err) = self.store.restore(snapshot) {
                        error!("failed to restore palette document: {restore_err}");
                    }
                    return Err(e);
                }
            }
        }

        let dropped = self
            .selection
            .reconcile(remaining.iter().map(|p| p.name.as_str()));
        if dropped > 0 {
            debug!(dropped, "selection reconciled after delete");
        }
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::CategoryFilter;
    use std::cell::Cell;
    use std::path::Path;
    use std::rc::Rc;
    use tempfile::TempDir;

    const DOC: &str = r##"[
        {"name": "A", "category": "Warm", "tags": ["fire"], "colors": ["#ff0000", "#ffff00"]},
        {"name": "B", "category": "Cool", "tags": ["ice"], "colors": ["#0000ff"]},
        {"name": "C", "category": "Warm", "colors": ["#ff8800"]}
    ]"##;

    fn session(dir: &TempDir) -> Session {
        let path = dir.path().join("palettes.json");
        std::fs::write(&path, DOC).unwrap();
        Session::new(PaletteStore::new(path))
    }

    fn names(palettes: &[&Palette]) -> Vec<String> {
        palettes.iter().map(|p| p.name.clone()).collect()
    }

    struct FailingRemote {
        calls: Rc<Cell<usize>>,
    }

    impl RemoteSync for FailingRemote {
        fn push(&self, _document: &Path) -> Result<(), StoreError> {
            self.calls.set(self.calls.get() + 1);
            Err(StoreError::Sync("remote unreachable".into()))
        }
    }

    struct RecordingRemote {
        calls: Rc<Cell<usize>>,
    }

    impl RemoteSync for RecordingRemote {
        fn push(&self, document: &Path) -> Result<(), StoreError> {
            assert!(document.exists());
            self.calls.set(self.calls.get() + 1);
            Ok(())
        }
    }

    #[test]
    fn visible_applies_criteria() {
        let dir = TempDir::new().unwrap();
        let mut session = session(&dir);
        let criteria = FilterCriteria::new(CategoryFilter::parse("Warm"), "");
        assert_eq!(names(&session.visible(&criteria).unwrap()), ["A", "C"]);
    }

    #[test]
    fn export_bundle_uses_store_order() {
        let dir = TempDir::new().unwrap();
        let mut session = session(&dir);
        session.toggle("C");
        session.toggle("A");

        let bundle = session.export_bundle().unwrap();
        let parsed: Vec<Palette> = serde_json::from_str(&bundle).unwrap();
        let order: Vec<&str> = parsed.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(order, ["A", "C"]);
    }

    #[test]
    fn toggle_accepts_names_outside_the_visible_set() {
        let dir = TempDir::new().unwrap();
        let mut session = session(&dir);
        let criteria = FilterCriteria::new(CategoryFilter::parse("Cool"), "");
        assert_eq!(session.visible(&criteria).unwrap().len(), 1);

        assert!(session.toggle("A"));
        assert_eq!(names(&session.exported().unwrap()), ["A"]);
    }

    #[test]
    fn select_all_visible_adds_filtered_names() {
        let dir = TempDir::new().unwrap();
        let mut session = session(&dir);
        session.toggle("B");
        let criteria = FilterCriteria::new(CategoryFilter::All, "fire");
        session.select_all_visible(&criteria).unwrap();
        assert_eq!(session.selection().names(), ["B", "A"]);
    }

    #[test]
    fn deleting_a_selected_palette_removes_it_everywhere() {
        let dir = TempDir::new().unwrap();
        let mut session = session(&dir);
        session.bulk_replace(["B", "A"]);

        assert!(session.delete("B").unwrap());
        assert_eq!(session.selection().names(), ["A"]);
        let remaining: Vec<&str> = session
            .palettes()
            .unwrap()
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(remaining, ["A", "C"]);
    }

    #[test]
    fn deleting_an_unknown_palette_changes_nothing() {
        let dir = TempDir::new().unwrap();
        let mut session = session(&dir);
        session.toggle("A");

        assert!(!session.delete("Nope").unwrap());
        assert_eq!(session.palettes().unwrap().len(), 3);
        assert_eq!(session.selection().names(), ["A"]);
        assert_eq!(std::fs::read_to_string(session.store().path()).unwrap(), DOC);
    }

    #[test]
    fn reload_reconciles_selection() {
        let dir = TempDir::new().unwrap();
        let mut session = session(&dir);
        session.bulk_replace(["A", "B"]);

        std::fs::write(
            session.store().path(),
            r##"[{"name": "B", "colors": ["#000000"]}]"##,
        )
        .unwrap();
        session.reload().unwrap();
        assert_eq!(session.selection().names(), ["B"]);
    }

    #[test]
    fn failed_remote_push_rolls_back_delete() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("palettes.json");
        std::fs::write(&path, DOC).unwrap();
        let calls = Rc::new(Cell::new(0));
        let mut session = Session::with_remote(
            PaletteStore::new(&path),
            Box::new(FailingRemote {
                calls: Rc::clone(&calls),
            }),
        );
        session.toggle("B");

        let err = session.delete("B").unwrap_err();
        assert!(matches!(err, StoreError::Sync(_)));
        assert_eq!(calls.get(), 1);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), DOC);
        assert_eq!(session.palettes().unwrap().len(), 3);
        assert_eq!(session.selection().names(), ["B"]);
    }

    #[test]
    fn successful_remote_push_commits_delete() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("palettes.json");
        std::fs::write(&path, DOC).unwrap();
        let calls = Rc::new(Cell::new(0));
        let mut session = Session::with_remote(
            PaletteStore::new(&path),
            Box::new(RecordingRemote {
                calls: Rc::clone(&calls),
            }),
        );

        assert!(session.delete("A").unwrap());
        assert_eq!(calls.get(), 1);
        assert_eq!(session.palettes().unwrap().len(), 2);

        // No-op deletes never reach the remote.
        assert!(!session.delete("A").unwrap());
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn color_table_for_known_and_unknown_names() {
        let dir = TempDir::new().unwrap();
        let mut session = session(&dir);
        assert_eq!(
            session.color_table("A").unwrap().as_deref(),
            Some("1 255 0 0\n2 255 255 0\n")
        );
        assert_eq!(session.color_table("Z").unwrap(), None);
    }

    #[test]
    fn record_without_colors_never_surfaces() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("palettes.json");
        std::fs::write(
            &path,
            r##"[{"name": "X"}, {"name": "Y", "colors": ["#000000"]}]"##,
        )
        .unwrap();
        let mut session = Session::new(PaletteStore::new(path));

        let all = FilterCriteria::default();
        assert_eq!(names(&session.visible(&all).unwrap()), ["Y"]);
        session.toggle("X");
        session.toggle("Y");
        assert_eq!(names(&session.exported().unwrap()), ["Y"]);
        assert_eq!(session.load_report().invalid_records, 1);
    }
}
