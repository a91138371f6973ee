//! Theming primitives shared by form controls.
//!
//! The crate owns the modal, button, search box, spinner, and icon atoms that form
//! controls compose, plus the stable `data-ui-*` DOM contract the host stylesheet
//! targets. Controls should compose these primitives instead of emitting ad hoc overlay
//! or input markup.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod primitives;

pub use primitives::{
    Button, ButtonVariant, EmptyState, InlineSvg, Modal, ModalBody, ModalFooter, ModalHeader,
    ModalSize, SearchBox, Spinner, SpinnerSize,
};

/// Convenience imports for control crates consuming the primitive set.
pub mod prelude {
    pub use crate::{
        Button, ButtonVariant, EmptyState, InlineSvg, Modal, ModalBody, ModalFooter, ModalHeader,
        ModalSize, SearchBox, Spinner, SpinnerSize,
    };
}
