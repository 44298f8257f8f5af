//! Client-side state.
//!
//! DESIGN
//! ======
//! Only the modal carries state worth modelling; the theme preference is a
//! two-value enum kept next to its storage glue in `util::theme`.

pub mod modal;
