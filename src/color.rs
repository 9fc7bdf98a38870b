use std::fmt::Display;

/// Selects one of the four components of a [`Color`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Channel {
    Red,
    Green,
    Blue,
    Alpha,
}

impl Channel {
    pub const ALL: [Channel; 4] = [Self::Red, Self::Green, Self::Blue, Self::Alpha];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Alpha => "alpha",
        }
    }
}

impl Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A pixel with four full range 16 bit components, alpha not premultiplied.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Color {
    pub red: u16,
    pub green: u16,
    pub blue: u16,
    pub alpha: u16,
}

impl Color {
    pub fn new(red: u16, green: u16, blue: u16, alpha: u16) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Replicates `value` into red, green and blue. Alpha stays at zero.
    pub fn greyscale(value: u16) -> Self {
        Self::new(value, value, value, 0)
    }

    pub fn component(&self, channel: Channel) -> u16 {
        match channel {
            Channel::Red => self.red,
            Channel::Green => self.green,
            Channel::Blue => self.blue,
            Channel::Alpha => self.alpha,
        }
    }
}

impl From<[u16; 4]> for Color {
    fn from(value: [u16; 4]) -> Self {
        Self::new(value[0], value[1], value[2], value[3])
    }
}

impl From<Color> for [u16; 4] {
    fn from(value: Color) -> Self {
        [value.red, value.green, value.blue, value.alpha]
    }
}
