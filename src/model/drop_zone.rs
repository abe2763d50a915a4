use std::path::PathBuf;

/// Window-level file drop tracking.
///
/// The window reports one drop event per file. Once a drop has been taken,
/// further drops are ignored until that intake settles, so only the first file
/// of a batch is staged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DropZone {
    #[default]
    Idle,
    Hovering,
    Taken,
}

impl DropZone {
    pub fn hover(&mut self) {
        if *self == DropZone::Idle {
            *self = DropZone::Hovering;
        }
    }

    pub fn leave(&mut self) {
        if *self == DropZone::Hovering {
            *self = DropZone::Idle;
        }
    }

    pub fn drop_file(&mut self, path: PathBuf) -> Option<PathBuf> {
        match self {
            DropZone::Taken => {
                log::debug!("Ignoring additional dropped file {}", path.display());
                None
            }
            DropZone::Idle | DropZone::Hovering => {
                *self = DropZone::Taken;
                Some(path)
            }
        }
    }

    /// Called once the taken file has been staged or rejected.
    pub fn settle(&mut self) {
        *self = DropZone::Idle;
    }

    pub fn is_hovering(&self) -> bool {
        *self == DropZone::Hovering
    }
}
