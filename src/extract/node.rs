use scraper::{ElementRef, Html, Selector};

use crate::error::GrabError;

/// A parsed HTML page.
pub struct Document {
    html: Html,
}

impl Document {
    pub fn parse(html: &str) -> Self {
        Self {
            html: Html::parse_document(html),
        }
    }

    pub fn root(&self) -> Node<'_> {
        Node(self.html.root_element())
    }
}

/// One element of a [`Document`].
#[derive(Debug, Clone, Copy)]
pub struct Node<'a>(ElementRef<'a>);

impl<'a> Node<'a> {
    /// All descendant text concatenated in document order.
    pub fn text(&self) -> String {
        self.0.text().collect()
    }

    /// First descendant matching `css`.
    pub fn find(&self, css: &str) -> Result<Option<Node<'a>>, GrabError> {
        let selector = selector(css)?;
        Ok(self.0.select(&selector).next().map(Node))
    }

    /// Every descendant matching `css`, in document order.
    pub fn find_all(&self, css: &str) -> Result<Vec<Node<'a>>, GrabError> {
        let selector = selector(css)?;
        Ok(self.0.select(&selector).map(Node).collect())
    }
}

fn selector(css: &str) -> Result<Selector, GrabError> {
    Selector::parse(css).map_err(|_| GrabError::InvalidSelector(css.to_string()))
}
