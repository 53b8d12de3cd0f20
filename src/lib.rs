//! # compton
//!
//! Server-side HTML document composition with atomic CSS classes.
//!
//! ## Features
//!
//! - Typed style values encoded as short class tokens (`rg-small`, `bg-red`)
//! - A thread-safe class registry that generates the matching stylesheet
//! - A component tree written in three phases: requirements, content, deferrals
//! - One-time custom-element definitions and component resources per document
//!
//! ## Quick Start
//!
//! ```
//! use compton::components::{FlexItems, Page};
//! use compton::element::ElementExt;
//! use compton::els;
//! use compton::style::{ClassRegistry, Direction, Size};
//!
//! let classes = ClassRegistry::new();
//! let page = Page::new("Hello", &classes).with_child(
//!     FlexItems::new(&classes, Direction::Column)
//!         .row_gap(Size::Small)
//!         .with_child(els::heading_text("Hello", 1))
//!         .with_child(els::div_text("world")),
//! );
//!
//! let html = page.render_to_string()?;
//! assert!(html.contains(".rg-small{--rg:var(--s-small)}"));
//! # Ok::<(), compton::Error>(())
//! ```
//!
//! ## Styling
//!
//! Every styling call registers the class it returns, so the stylesheet only
//! ever contains rules for classes actually in use:
//!
//! ```
//! use compton::style::{ClassRegistry, Color};
//!
//! let classes = ClassRegistry::new();
//! let token = classes.background_color(Color::Red);
//! assert_eq!(token.as_str(), "bg-red");
//! assert_eq!(classes.generate_stylesheet()?, ".bg-red{--bg:var(--c-red)}");
//! # Ok::<(), compton::Error>(())
//! ```

pub mod components;
pub mod custom_elements;
pub mod element;
pub mod els;
pub mod error;
pub mod escape;
pub mod registrar;
pub mod style;
pub mod template;

pub use components::{Page, PageConfig};
pub use element::{BaseElement, Element, ElementExt};
pub use error::{Error, Result};
pub use registrar::{DocumentRegistrar, Registrar};
pub use style::{ClassRegistry, ClassToken};
