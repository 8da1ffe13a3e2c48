//! Use-Case-Funktionen: die einzige Stelle, die das Dokument mutiert.

pub mod apply;
pub mod camera;
pub mod items;
pub mod layers;
pub mod pick;
pub mod viewport;
