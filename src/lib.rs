//! Viralcard turns a video description, a set of images or a handful of search results into
//! shareable summary cards.
//!
//! The flow is a linear wizard:
//!
//! - Collect a [`Submission`] from one of the intake builders
//! - Summarize it through a [`SummarizationGateway`] into a [`Summary`]
//! - Review, then lay the summary out onto one of the [`catalog`] templates
//! - Edit the card in an [`EditorSession`] and export it through an [`ExportAdapter`]
#![forbid(unsafe_code)]

mod foundation;

pub(crate) mod editor;
pub(crate) mod export;
pub(crate) mod gateway;
pub(crate) mod i18n;
pub(crate) mod source;
pub(crate) mod summary;
pub(crate) mod template;
pub(crate) mod wizard;

pub use kurbo::{Point, Rect, Vec2};

pub use crate::foundation::core::{Canvas, Color};
pub use crate::foundation::error::{CardError, CardResult};
pub use crate::foundation::math::Rng64;
pub use crate::i18n::{Locale, Notice};

pub use crate::source::descriptor::{
    ImageRef, MediaRef, SearchProvider, SearchResult, SourceDescriptor, SourceKind,
};
pub use crate::source::intake::{ImagesIntake, SearchIntake, Submission, VideoIntake};
pub use crate::summary::model::{GoldenQuote, Summary, TextPath};

pub use crate::gateway::config::{
    ENV_API_KEY, ENV_API_URL, ENV_MODEL, ENV_PROVIDER, GatewayConfig, Provider,
};
pub use crate::gateway::http::HttpGateway;
pub use crate::gateway::response::{parse_search_response, parse_summary_response};
pub use crate::gateway::{CredentialValidator, SearchGateway, SummarizationGateway};

pub use crate::template::catalog::{TemplateEntry, TemplateId, catalog};
pub use crate::template::engine::{RenderInput, RenderMode, render, render_scene};
pub use crate::template::scene::{
    Block, BlockContent, ElementId, Fill, ImageBlock, ImageFilter, ResolvedImage, ShapeBlock,
    TextAlign, TextBlock, VisualTree,
};
pub use crate::template::slots::{ShufflePolicy, SlotBoard, SlotId};
pub use crate::template::style::{FontFamily, StyleConfig};

pub use crate::editor::composition::{ElementOverride, StylePatch, VisualComposition};
pub use crate::editor::drag::{DragEffect, DragGesture, DragState};
pub use crate::editor::session::{EditorOpts, EditorSession, TextDraft};

pub use crate::export::raster::{ExportAdapter, ExportOpts, ExportedImage, PngExporter};
pub use crate::export::svg::{ImageEmbedder, to_svg};

pub use crate::wizard::controller::{Transition, WizardController, WizardOpts, Workspace};
pub use crate::wizard::state::{StepKind, WizardStep};
