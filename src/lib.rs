#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

pub mod config;
pub mod controller;
pub mod curve;
pub mod draw;
pub mod error;
pub mod frame;
pub mod script;
pub mod selection;
pub mod store;

pub use crate::config::{EditorConfig, FrameSettings, Viewport};
pub use crate::controller::{EditorContext, InputEvent, InteractionController, Transition};
pub use crate::curve::CurveSample;
pub use crate::error::EditError;
pub use crate::frame::{FrameRenderPlan, Marker};
pub use crate::script::EventScript;
pub use crate::selection::Selection;
pub use crate::store::{ControlPointStore, Point};
