//! Cursor and function types read by the banner
//!
//! The plotting engine owns cursors and functions. The banner only ever
//! borrows them for the duration of a single reload.

use heapless::String;

/// Maximum length of a user-given function name, in bytes.
pub const MAX_FUNCTION_NAME_LENGTH: usize = 32;

/// Current cursor position in the coordinate space of a plotted curve.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CurveViewCursor {
    x: f64,
    y: f64,
}

impl CurveViewCursor {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Abscissa of the cursor.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Ordinate of the cursor.
    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn move_to(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
    }
}

/// A plottable function of one variable.
pub trait Function {
    /// Evaluate the function at `abscissa`.
    ///
    /// Returns NaN where the function is undefined.
    fn evaluate(&self, abscissa: f64) -> f64;

    /// User-given display name, if the function was renamed.
    fn name(&self) -> Option<&str> {
        None
    }

    /// Symbol of the function's variable, `x` for cartesian functions.
    fn variable_symbol(&self) -> char {
        'x'
    }
}

/// Cartesian function backed by a plain evaluation routine.
///
/// # Examples
/// ```ignore
/// let square = CartesianFunction::new(|x| x * x).with_name("area");
/// assert_eq!(square.evaluate(3.0), 9.0);
/// ```
#[derive(Clone)]
pub struct CartesianFunction {
    expression: fn(f64) -> f64,
    name: String<MAX_FUNCTION_NAME_LENGTH>,
    variable: char,
}

impl CartesianFunction {
    pub fn new(expression: fn(f64) -> f64) -> Self {
        Self {
            expression,
            name: String::new(),
            variable: 'x',
        }
    }

    /// Set the display name.
    ///
    /// Names longer than [`MAX_FUNCTION_NAME_LENGTH`] bytes are cut at the
    /// last character that fits.
    pub fn with_name(mut self, name: &str) -> Self {
        self.name.clear();
        for c in name.chars() {
            if self.name.push(c).is_err() {
                break;
            }
        }
        self
    }

    pub fn with_variable(mut self, variable: char) -> Self {
        self.variable = variable;
        self
    }
}

impl Function for CartesianFunction {
    fn evaluate(&self, abscissa: f64) -> f64 {
        (self.expression)(abscissa)
    }

    fn name(&self) -> Option<&str> {
        if self.name.is_empty() {
            None
        } else {
            Some(self.name.as_str())
        }
    }

    fn variable_symbol(&self) -> char {
        self.variable
    }
}
