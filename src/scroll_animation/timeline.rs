//! Minimal tween timeline: each tween drives one property of one target
//! between two positions on a shared time axis.

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Ease {
    #[allow(dead_code)]
    Linear,
    Power1In,
    Power1Out,
    Power2Out,
}

impl Ease {
    pub fn apply(self, progress: f32) -> f32 {
        let p = progress.clamp(0.0, 1.0);
        match self {
            Ease::Linear => p,
            Ease::Power1In => p * p,
            Ease::Power1Out => 1.0 - (1.0 - p).powi(2),
            Ease::Power2Out => 1.0 - (1.0 - p).powi(3),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Property {
    X,
    Y,
    Opacity,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Props {
    pub x: f32,
    pub y: f32,
    pub opacity: f32,
}

impl Props {
    pub fn get(&self, property: Property) -> f32 {
        match property {
            Property::X => self.x,
            Property::Y => self.y,
            Property::Opacity => self.opacity,
        }
    }

    pub fn set(&mut self, property: Property, value: f32) {
        match property {
            Property::X => self.x = value,
            Property::Y => self.y = value,
            Property::Opacity => self.opacity = value,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tween {
    pub target: usize,
    pub property: Property,
    /// `None` continues from wherever the property is when the tween starts.
    pub from: Option<f32>,
    pub to: f32,
    pub start: f32,
    pub duration: f32,
    pub ease: Ease,
}

impl Tween {
    pub fn end(&self) -> f32 {
        self.start + self.duration
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Timeline {
    initial: Vec<Props>,
    tweens: Vec<Tween>,
}

impl Timeline {
    pub fn new(initial: Vec<Props>) -> Self {
        Self {
            initial,
            tweens: vec![],
        }
    }

    #[allow(dead_code)]
    pub fn targets(&self) -> usize {
        self.initial.len()
    }

    #[allow(dead_code)]
    pub fn tweens(&self) -> &[Tween] {
        &self.tweens
    }

    pub fn to(
        &mut self,
        target: usize,
        to: &[(Property, f32)],
        duration: f32,
        ease: Ease,
        position: f32,
    ) -> &mut Self {
        for &(property, value) in to {
            self.push(target, property, None, value, duration, ease, position);
        }
        self
    }

    /// Like `to`, but the target holds the `from` values until the tween starts.
    pub fn from_to(
        &mut self,
        target: usize,
        from: &[(Property, f32)],
        to: &[(Property, f32)],
        duration: f32,
        ease: Ease,
        position: f32,
    ) -> &mut Self {
        for &(property, value) in to {
            let start_value = from
                .iter()
                .find(|(p, _)| *p == property)
                .map(|(_, v)| *v);
            self.push(target, property, start_value, value, duration, ease, position);
        }
        self
    }

    #[allow(clippy::too_many_arguments)]
    fn push(
        &mut self,
        target: usize,
        property: Property,
        from: Option<f32>,
        to: f32,
        duration: f32,
        ease: Ease,
        start: f32,
    ) {
        if target >= self.initial.len() {
            return;
        }
        self.tweens.push(Tween {
            target,
            property,
            from,
            to,
            start: start.max(0.0),
            duration: duration.max(0.0),
            ease,
        });
    }

    pub fn duration(&self) -> f32 {
        self.tweens.iter().map(Tween::end).fold(0.0, f32::max)
    }

    pub fn props_at(&self, target: usize, time: f32) -> Props {
        let mut props = self.initial.get(target).copied().unwrap_or_default();
        for property in [Property::X, Property::Y, Property::Opacity] {
            props.set(property, self.value_at(target, property, props.get(property), time));
        }
        props
    }

    fn value_at(&self, target: usize, property: Property, initial: f32, time: f32) -> f32 {
        let mut tweens: Vec<&Tween> = self
            .tweens
            .iter()
            .filter(|t| t.target == target && t.property == property)
            .collect();
        tweens.sort_by(|a, b| a.start.total_cmp(&b.start));

        let mut value = initial;
        for (i, tween) in tweens.iter().enumerate() {
            if time < tween.start {
                if i == 0 {
                    if let Some(from) = tween.from {
                        value = from;
                    }
                }
                break;
            }
            let progress = if tween.duration <= 0.0 {
                1.0
            } else {
                (time - tween.start) / tween.duration
            };
            let from = tween.from.unwrap_or(value);
            value = from + (tween.to - from) * tween.ease.apply(progress);
        }
        value
    }
}
