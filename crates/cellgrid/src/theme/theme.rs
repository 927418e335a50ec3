use std::collections::{HashMap, HashSet};
use std::path::Path;

use console::Style;

use super::parse::parse_stylesheet;
use crate::error::GridError;
use crate::rendered::{Rendered, Span};

/// A style value: either concrete formatting or the name of another style.
#[derive(Debug, Clone)]
pub enum StyleValue {
    Concrete(Style),
    Alias(String),
}

impl From<Style> for StyleValue {
    fn from(style: Style) -> Self {
        StyleValue::Concrete(style)
    }
}

impl From<&str> for StyleValue {
    fn from(name: &str) -> Self {
        StyleValue::Alias(name.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(name: String) -> Self {
        StyleValue::Alias(name)
    }
}

/// A named collection of styles used to paint rendered tables.
///
/// [`Theme::new`] is empty, so everything it paints comes out plain unless
/// styles are added. [`Theme::default`] carries a style for every name the
/// renderer emits.
///
/// ```rust
/// use cellgrid::Theme;
/// use console::Style;
///
/// let theme = Theme::new()
///     .add("muted", Style::new().dim())
///     .add("tag.default", "muted");
/// assert!(theme.get("tag.default").is_some());
/// ```
#[derive(Debug, Clone)]
pub struct Theme {
    name: Option<String>,
    styles: HashMap<String, Style>,
    aliases: HashMap<String, String>,
}

impl Theme {
    /// Creates an empty, unnamed theme.
    pub fn new() -> Self {
        Theme {
            name: None,
            styles: HashMap::new(),
            aliases: HashMap::new(),
        }
    }

    /// The built-in styles for every style name the renderer emits.
    pub fn builtin() -> Self {
        Theme::new()
            .with_name("builtin")
            .add("header", Style::new().bold())
            .add("sort.indicator", Style::new().cyan())
            .add("tooltip", Style::new().dim())
            .add("border", Style::new().dim())
            .add("checkbox", Style::new().cyan())
            .add("empty", Style::new().dim().italic())
            .add("tag.default", Style::new().white())
            .add("tag.primary", Style::new().blue().bold())
            .add("tag.success", Style::new().green())
            .add("tag.warning", Style::new().yellow())
            .add("tag.danger", Style::new().red().bold())
            .add("tag.info", Style::new().cyan())
            .add("trend.up", Style::new().green())
            .add("trend.down", Style::new().red())
            .add("change.increase", "trend.up")
            .add("change.decrease", "trend.down")
            .add("change.neutral", Style::new().dim())
            .add("indicator.high", Style::new().red())
            .add("indicator.medium", Style::new().yellow())
            .add("indicator.low", Style::new().green())
            .add("indicator.active", Style::new().green())
            .add("indicator.inactive", Style::new().dim())
            .add("indicator.none", Style::new().dim())
            .add("row.hover", Style::new().reverse())
            .add("row.selected", Style::new().bold())
            .add("row.total", Style::new().bold())
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Parses a YAML stylesheet.
    ///
    /// ```rust
    /// use cellgrid::Theme;
    ///
    /// let theme = Theme::from_yaml(r#"
    /// header:
    ///   fg: cyan
    ///   bold: true
    /// tag.danger: "bright_red bold"
    /// row.total: header
    /// "#).unwrap();
    /// assert_eq!(theme.len(), 3);
    /// ```
    pub fn from_yaml(yaml: &str) -> Result<Self, GridError> {
        let mut theme = Theme::new();
        for (name, value) in parse_stylesheet(yaml)? {
            theme.insert(name, value);
        }
        Ok(theme)
    }

    /// Loads a YAML stylesheet. The theme is named after the file stem.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, GridError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| GridError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut theme = Self::from_yaml(&content)?;
        theme.name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .map(|s| s.to_string());
        log::debug!(
            "loaded theme {:?} with {} styles from {}",
            theme.name,
            theme.len(),
            path.display()
        );
        Ok(theme)
    }

    /// Adds a concrete style or an alias, replacing any earlier definition.
    pub fn add<V: Into<StyleValue>>(mut self, name: &str, value: V) -> Self {
        self.insert(name.to_string(), value.into());
        self
    }

    fn insert(&mut self, name: String, value: StyleValue) {
        match value {
            StyleValue::Concrete(style) => {
                self.aliases.remove(&name);
                self.styles.insert(name, style);
            }
            StyleValue::Alias(target) => {
                self.styles.remove(&name);
                self.aliases.insert(name, target);
            }
        }
    }

    /// Layers `other` on top of this theme. Definitions in `other` win.
    ///
    /// ```rust
    /// use cellgrid::Theme;
    /// use console::Style;
    ///
    /// let theme = Theme::default().merge(Theme::new().add("header", Style::new().magenta()));
    /// assert!(theme.get("tag.info").is_some());
    /// ```
    pub fn merge(mut self, other: Theme) -> Self {
        for (name, style) in other.styles {
            self.insert(name, StyleValue::Concrete(style));
        }
        for (name, target) in other.aliases {
            self.insert(name, StyleValue::Alias(target));
        }
        self
    }

    /// Resolves a style by name, following aliases. Unknown names and
    /// alias cycles give `None`.
    pub fn get(&self, name: &str) -> Option<&Style> {
        let mut current = name;
        let mut visited = HashSet::new();
        loop {
            if !visited.insert(current) {
                return None;
            }
            if let Some(style) = self.styles.get(current) {
                return Some(style);
            }
            current = self.aliases.get(current)?.as_str();
        }
    }

    /// Paints one span. Unstyled spans and unknown style names come out plain.
    pub fn paint(&self, span: &Span) -> String {
        let Some(name) = span.style.as_deref() else {
            return span.text.clone();
        };
        match self.get(name) {
            Some(style) => style.apply_to(&span.text).to_string(),
            None => {
                log::trace!("no style '{}' in theme, painting plain", name);
                span.text.clone()
            }
        }
    }

    /// Paints every span of a rendered value.
    pub fn render(&self, rendered: &Rendered) -> String {
        rendered.spans().iter().map(|span| self.paint(span)).collect()
    }

    pub fn len(&self) -> usize {
        self.styles.len() + self.aliases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty() && self.aliases.is_empty()
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::builtin()
    }
}
