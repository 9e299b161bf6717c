//! Common reusable UI components
//!
//! Building blocks shared by the landing page sections and widgets.

pub mod accordion;
pub mod animated_section;
pub mod button;
pub mod card;
pub mod form;
pub mod message;
pub mod modal;

pub use accordion::Accordion;
pub use animated_section::{AnimatedSection, ScrollAnimationScript};
pub use button::{Button, ButtonSize, ButtonVariant};
pub use card::{Card, CardContent, CardHeader, GlassCard};
pub use form::{CheckboxField, FormField, SelectField, TextAreaField};
pub use message::ErrorBanner;
pub use modal::{Modal, ModalSize};
