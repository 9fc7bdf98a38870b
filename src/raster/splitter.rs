use super::Raster;
use crate::color::{Channel, Color};

/// One greyscale raster per channel of the source.
pub struct SplitChannels {
    red: Raster,
    green: Raster,
    blue: Raster,
    alpha: Raster,
}

impl SplitChannels {
    pub fn channel(&self, channel: Channel) -> &Raster {
        match channel {
            Channel::Red => &self.red,
            Channel::Green => &self.green,
            Channel::Blue => &self.blue,
            Channel::Alpha => &self.alpha,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Channel, &Raster)> {
        Channel::ALL
            .into_iter()
            .map(move |channel| (channel, self.channel(channel)))
    }
}

pub struct ChannelSplitter {
    source: Raster,
}

impl ChannelSplitter {
    pub fn new(source: Raster) -> Self {
        ChannelSplitter { source }
    }

    pub fn split(self) -> SplitChannels {
        let (width, height) = self.source.bounds();
        let mut red = Raster::new(width, height);
        let mut green = Raster::new(width, height);
        let mut blue = Raster::new(width, height);
        let mut alpha = Raster::new(width, height);
        for row_index in 0..height {
            for column_index in 0..width {
                let dot = self.source.dot(column_index, row_index);
                red.set_dot(column_index, row_index, Color::greyscale(dot.red));
                green.set_dot(column_index, row_index, Color::greyscale(dot.green));
                blue.set_dot(column_index, row_index, Color::greyscale(dot.blue));
                alpha.set_dot(column_index, row_index, Color::greyscale(dot.alpha));
            }
        }
        SplitChannels {
            red,
            green,
            blue,
            alpha,
        }
    }
}

#[cfg(test)]
mod test {
    use super::ChannelSplitter;
    use crate::{
        color::{Channel, Color},
        raster::Raster,
    };

    fn full(value: u8) -> u16 {
        value as u16 * 257
    }

    fn two_by_two() -> Raster {
        let mut raster = Raster::new(2, 2);
        raster.set_dot(0, 0, Color::new(full(255), 0, 0, full(255)));
        raster.set_dot(1, 0, Color::new(0, full(255), 0, full(255)));
        raster.set_dot(0, 1, Color::new(0, 0, full(255), full(128)));
        raster.set_dot(1, 1, Color::new(full(10), full(20), full(30), 0));
        raster
    }

    fn assert_greyscale(raster: &Raster, expected: [u8; 4]) {
        let coordinates = [(0, 0), (1, 0), (0, 1), (1, 1)];
        for ((x, y), value) in coordinates.into_iter().zip(expected) {
            assert_eq!(
                raster.dot(x, y),
                Color::greyscale(full(value)),
                "dot ({}, {}) is wrong",
                x,
                y
            );
        }
    }

    #[test]
    fn split_two_by_two() {
        let channels = ChannelSplitter::new(two_by_two()).split();
        assert_greyscale(channels.channel(Channel::Red), [255, 0, 0, 10]);
        assert_greyscale(channels.channel(Channel::Green), [0, 255, 0, 20]);
        assert_greyscale(channels.channel(Channel::Blue), [0, 0, 255, 30]);
        assert_greyscale(channels.channel(Channel::Alpha), [255, 255, 128, 0]);
    }

    #[test]
    fn split_keeps_dimensions() {
        let channels = ChannelSplitter::new(Raster::new(7, 3)).split();
        for (channel, raster) in channels.iter() {
            assert_eq!(raster.bounds(), (7, 3), "{} has wrong size", channel);
        }
    }

    #[test]
    fn split_single_dot() {
        let mut source = Raster::new(1, 1);
        source.set_dot(0, 0, Color::new(1, 2, 3, 4));
        let channels = ChannelSplitter::new(source).split();
        for (channel, raster) in channels.iter() {
            let expected = (Channel::ALL.iter().position(|c| *c == channel).unwrap() + 1) as u16;
            assert_eq!(raster.dot(0, 0), Color::new(expected, expected, expected, 0));
        }
    }

    #[test]
    fn iterate_in_channel_order() {
        let channels = ChannelSplitter::new(Raster::new(1, 1)).split();
        let order: Vec<Channel> = channels.iter().map(|(channel, _)| channel).collect();
        assert_eq!(order, Channel::ALL.to_vec());
    }

    #[test]
    fn split_empty_raster() {
        let channels = ChannelSplitter::new(Raster::new(0, 0)).split();
        assert!(channels.channel(Channel::Blue).is_empty());
    }
}
