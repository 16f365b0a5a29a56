use std::fmt;

/// Perceived-brightness level above which dark text stays legible.
pub const LUMINANCE_THRESHOLD: f64 = 186.0;

/// Foreground colour used on dark backgrounds.
pub const LIGHT_FOREGROUND: &str = "ffffff";

/// RGB color representation.
///
/// Represents a color using red, green, and blue components, each in the range 0-255.
///
/// # Examples
///
/// ```rust
/// use wordhtml::common::RGBColor;
///
/// // Create a red color
/// let red = RGBColor::new(255, 0, 0);
///
/// // Create from hex string
/// let blue = RGBColor::from_hex("0000FF").unwrap();
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RGBColor {
    /// Red component (0-255)
    pub r: u8,
    /// Green component (0-255)
    pub g: u8,
    /// Blue component (0-255)
    pub b: u8,
}

impl RGBColor {
    /// Create a new RGB color.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create an RGB color from a hex string.
    ///
    /// Accepts exactly six hex digits with an optional leading `#`. Anything
    /// else, including the `auto` keyword, yields `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use wordhtml::common::RGBColor;
    ///
    /// let red = RGBColor::from_hex("FF0000").unwrap();
    /// let blue = RGBColor::from_hex("#0000FF").unwrap();
    /// assert!(RGBColor::from_hex("auto").is_none());
    /// ```
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }

        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

        Some(Self::new(r, g, b))
    }

    /// Convert to hex string (without # prefix).
    ///
    /// ```rust
    /// use wordhtml::common::RGBColor;
    ///
    /// let color = RGBColor::new(255, 0, 0);
    /// assert_eq!(color.to_hex(), "FF0000");
    /// ```
    pub fn to_hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Perceptual luminance, `0.299 R + 0.587 G + 0.114 B`, in `0.0..=255.0`.
    #[inline]
    pub fn luminance(&self) -> f64 {
        0.299 * f64::from(self.r) + 0.587 * f64::from(self.g) + 0.114 * f64::from(self.b)
    }

    /// Whether dark text is legible on this colour.
    #[inline]
    pub fn is_light(&self) -> bool {
        self.luminance() > LUMINANCE_THRESHOLD
    }
}

impl fmt::Display for RGBColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.to_hex())
    }
}

/// Pick a foreground override for text drawn on `background`.
///
/// Returns `None` when the default (dark) text colour is legible, or when
/// `background` is not a six-digit hex colour. Otherwise returns
/// [`LIGHT_FOREGROUND`].
///
/// ```rust
/// use wordhtml::common::contrasting_foreground;
///
/// assert_eq!(contrasting_foreground("FFFFFF"), None);
/// assert_eq!(contrasting_foreground("000000"), Some("ffffff"));
/// ```
pub fn contrasting_foreground(background: &str) -> Option<&'static str> {
    let color = RGBColor::from_hex(background)?;
    if color.is_light() {
        None
    } else {
        Some(LIGHT_FOREGROUND)
    }
}
