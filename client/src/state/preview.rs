//! Avatar drop zone preview state.
//!
//! DESIGN
//! ======
//! File reads finish asynchronously and may complete out of order. Every read
//! is tagged with the generation current when it started; only a read whose
//! generation is still current may publish its preview.

#[cfg(test)]
#[path = "preview_test.rs"]
mod preview_test;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PreviewState {
    generation: u64,
    pending: bool,
    data_url: Option<String>,
    /// A drag is hovering over the drop zone.
    pub drag_active: bool,
}

impl PreviewState {
    /// Start a read for a newly selected file and return its generation.
    pub fn begin_read(&mut self) -> u64 {
        self.generation += 1;
        self.pending = true;
        self.generation
    }

    /// Publish a finished read. Returns `false` if the read is stale.
    pub fn finish_read(&mut self, generation: u64, data_url: String) -> bool {
        if generation != self.generation {
            return false;
        }
        self.pending = false;
        self.data_url = Some(data_url);
        true
    }

    /// Settle a failed read. Returns `false` if the read is stale.
    pub fn fail_read(&mut self, generation: u64) -> bool {
        if generation != self.generation {
            return false;
        }
        self.pending = false;
        self.data_url = None;
        true
    }

    /// Drop the preview and invalidate any read still in flight.
    pub fn remove(&mut self) {
        self.generation += 1;
        self.pending = false;
        self.data_url = None;
    }

    pub fn data_url(&self) -> Option<&str> {
        self.data_url.as_deref()
    }

    pub fn has_preview(&self) -> bool {
        self.data_url.is_some()
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Prompt shown in the drop zone, if any.
    pub fn prompt(&self) -> Option<&'static str> {
        if self.drag_active {
            Some("Drop the file here ...")
        } else if self.has_preview() {
            None
        } else {
            Some("Drag and drop or click to upload")
        }
    }
}
