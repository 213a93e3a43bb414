#![forbid(unsafe_code)]

//! Reference HTML renderer for carousel views.
//!
//! Hosts that render into a DOM can use this directly; other hosts can read
//! it as a description of what each view field means visually. Pane and
//! indicator contents are written through their `Display` impl and escaped.
//!
//! ```
//! use carousel_widgets::FixedWidth;
//! use carousel_widgets::carousel::Carousel;
//! use carousel_widgets::config::CarouselConfig;
//! use carousel_widgets::markup::render_markup;
//!
//! let mut carousel = Carousel::new(["one", "two", "three"], CarouselConfig::default());
//! carousel.mount(&FixedWidth(300.0));
//! let html = render_markup(&carousel.view());
//! assert!(html.contains(r#"aria-selected="true""#));
//! ```

use std::fmt::{self, Display, Write};

use crate::carousel::CarouselView;
use crate::content::{ContentView, PaneView};
use crate::selector::{LIST_CLASS, SelectorView};

/// Render a whole carousel view.
#[must_use]
pub fn render_markup<T: Display>(view: &CarouselView<'_, T>) -> String {
    Markup(view).to_string()
}

/// `Display` adapter that writes a view as HTML.
#[derive(Debug, Clone, Copy)]
pub struct Markup<'v, V>(pub &'v V);

impl<T: Display> Display for Markup<'_, CarouselView<'_, T>> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let view = self.0;
        f.write_str("<div")?;
        write_class(f, view.class_name)?;
        f.write_str(" tabindex=\"0\">")?;
        Markup(&view.content).fmt(f)?;
        write_selector(f, &view.selector, |_, _| Ok(()))?;
        f.write_str("</div>")
    }
}

impl<T: Display> Display for Markup<'_, ContentView<'_, T>> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let view = self.0;
        f.write_str("<div")?;
        write_class(f, &view.class_name)?;
        f.write_str(">")?;
        for pane in &view.panes {
            write_pane(f, pane)?;
        }
        f.write_str("</div>")
    }
}

impl<I: Display> Display for Markup<'_, SelectorView<'_, I>> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_selector(f, self.0, |f, content| write_escaped(f, &content.to_string()))
    }
}

fn write_selector<I>(
    f: &mut fmt::Formatter<'_>,
    view: &SelectorView<'_, I>,
    write_content: impl Fn(&mut fmt::Formatter<'_>, &I) -> fmt::Result,
) -> fmt::Result {
    f.write_str("<ul")?;
    write_class(f, LIST_CLASS)?;
    f.write_str(">")?;
    for item in &view.items {
        f.write_str("<li")?;
        write_class(f, &item.class_name)?;
        write!(f, " data-index=\"{}\" aria-selected=\"{}\">", item.index, item.selected)?;
        match item.content {
            Some(content) => write_content(f, content)?,
            None => f.write_str("<button tabindex=\"-1\"></button>")?,
        }
        f.write_str("</li>")?;
    }
    f.write_str("</ul>")
}

fn write_pane<T: Display>(f: &mut fmt::Formatter<'_>, pane: &PaneView<'_, T>) -> fmt::Result {
    let placement = &pane.placement;
    f.write_str("<div")?;
    write_class(f, &pane.class_name)?;
    write!(
        f,
        " style=\"left: {}; margin-left: {}; opacity: {}\" aria-hidden=\"{}\">",
        placement.left, placement.margin_left, placement.opacity, pane.hidden
    )?;
    write_escaped(f, &pane.content.to_string())?;
    f.write_str("</div>")
}

fn write_class(f: &mut impl Write, class_name: &str) -> fmt::Result {
    if class_name.is_empty() {
        return Ok(());
    }
    f.write_str(" class=\"")?;
    write_escaped(f, class_name)?;
    f.write_char('"')
}

fn write_escaped(f: &mut impl Write, text: &str) -> fmt::Result {
    for ch in text.chars() {
        match ch {
            '&' => f.write_str("&amp;")?,
            '<' => f.write_str("&lt;")?,
            '>' => f.write_str("&gt;")?,
            '"' => f.write_str("&quot;")?,
            '\'' => f.write_str("&#39;")?,
            _ => f.write_char(ch)?,
        }
    }
    Ok(())
}
