/// Promotional overlays a page can show.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModalKind {
    /// Production-process walkthrough.
    Process,
    /// Discount voucher; opening it triggers a celebration burst.
    Voucher,
}

/// Open/closed flags for the page's modals.
///
/// Only one modal is meant to be primary at a time, but nothing enforces it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ModalState {
    /// Production-process modal visible.
    pub process_open: bool,
    /// Voucher modal visible.
    pub voucher_open: bool,
}

impl ModalState {
    fn flag(&mut self, kind: ModalKind) -> &mut bool {
        match kind {
            ModalKind::Process => &mut self.process_open,
            ModalKind::Voucher => &mut self.voucher_open,
        }
    }

    /// Show `kind`. Returns whether it was previously closed.
    pub fn open(&mut self, kind: ModalKind) -> bool {
        !std::mem::replace(self.flag(kind), true)
    }

    /// Hide `kind`. Returns whether it was previously open.
    pub fn close(&mut self, kind: ModalKind) -> bool {
        std::mem::replace(self.flag(kind), false)
    }

    /// Whether `kind` is visible.
    pub fn is_open(&self, kind: ModalKind) -> bool {
        match kind {
            ModalKind::Process => self.process_open,
            ModalKind::Voucher => self.voucher_open,
        }
    }

    /// The modal drawn on top when several are open; the voucher wins.
    pub fn primary(&self) -> Option<ModalKind> {
        if self.voucher_open {
            Some(ModalKind::Voucher)
        } else if self.process_open {
            Some(ModalKind::Process)
        } else {
            None
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/modal.rs"]
mod tests;
