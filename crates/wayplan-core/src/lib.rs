//! # Wayplan Core Library
//!
//! This library provides the core business logic for the Wayplan trip
//! planner: it turns a recurring daily availability pattern, a pool of
//! attractions and venues, per-day hotel selections, and externally
//! supplied transit legs into one strictly ordered, trip-bounded timeline
//! of events. The CLI binary is a thin layer over this library.
//!
//! ## Architecture
//!
//! - **Calendar**: A day-relative slot template (sleep, meals, available
//!   and venue windows) instantiated against concrete dates
//! - **Packer**: Greedy, deterministic placement of movable items into
//!   available/venue windows, clipped at window boundaries
//! - **Planner**: Day-by-day event construction plus trip-wide dependency
//!   resolution into a chronologically sorted timeline
//! - **Export**: Serialization of a resolved timeline to the XML-like
//!   exchange document
//!
//! ## Key Components
//!
//! - [`TripPlanner`]: One-shot timeline builder over the collaborator traits
//! - [`DayTemplate`]: Validated availability template
//! - [`resolve`]: Dependency-resolution pass with a degradation diagnostic
//! - [`Config`]: Application configuration management

pub mod calendar;
pub mod error;
pub mod event;
pub mod export;
pub mod hotel;
pub mod items;
pub mod packer;
pub mod planner;
pub mod resolver;
pub mod sources;
pub mod storage;
pub mod transit;
pub mod trip;

pub use calendar::{AvailabilitySlot, DaySlot, DayTemplate, SlotKind};
pub use error::{ConfigError, PlanError, ValidationError};
pub use event::{EventPayload, MealType, TimelineEvent};
pub use hotel::{Hotel, StayTimes};
pub use items::{ItemQueue, MovableItem};
pub use packer::Placement;
pub use planner::{TripPlan, TripPlanner};
pub use resolver::{resolve, ResolvedTimeline};
pub use sources::{
    AttractionSource, HotelSelection, PerDayHotels, StaticItems, StaticLegTable,
    TransitLegProvider,
};
pub use storage::Config;
pub use transit::{LegKind, TransitLeg, TransitMode};
pub use trip::TripWindow;
