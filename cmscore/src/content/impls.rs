use std::{
    fmt,
    str::FromStr,
};
use crate::{
    error::ValueError,
    workflow::State,
};
use super::*;

impl ContentKind {
    /// The collection segment of the REST path for this kind.
    pub fn path_segment(&self) -> &'static str {
        match self {
            ContentKind::Report => "reports",
            ContentKind::Blog => "blogs",
            ContentKind::PressRelease => "press-releases",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            ContentKind::Report => "report",
            ContentKind::Blog => "blog",
            ContentKind::PressRelease => "press_release",
        })
    }
}

impl FromStr for ContentKind {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('-', "_").as_ref() {
            "report" | "reports" => Ok(ContentKind::Report),
            "blog" | "blogs" => Ok(ContentKind::Blog),
            "press_release" | "press_releases" => Ok(ContentKind::PressRelease),
            _ => Err(ValueError::Unsupported(s.to_string())),
        }
    }
}

#[cfg(feature = "clap")]
mod clap {
    use ::clap::{
        ValueEnum,
        builder::PossibleValue,
    };
    use super::*;

    impl ValueEnum for ContentKind {
        fn value_variants<'a>() -> &'a [Self] {
            &[
                ContentKind::Report,
                ContentKind::Blog,
                ContentKind::PressRelease,
            ]
        }

        fn to_possible_value(&self) -> Option<PossibleValue> {
            Some(match self {
                ContentKind::Report => PossibleValue::new("report"),
                ContentKind::Blog => PossibleValue::new("blog"),
                ContentKind::PressRelease => PossibleValue::new("press-release"),
            })
        }
    }
}

impl ContentItem {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            .. Default::default()
        }
    }

    /// Clears a schedule that can no longer apply.
    ///
    /// Once an item is published any schedule it carried is considered
    /// consumed, whether it was published by hand or by the
    /// content-service acting on the schedule.
    pub fn reconcile(mut self) -> Self {
        if self.status == State::Published {
            if let Some(scheduled_at) = self.scheduled_at.take() {
                log::debug!(
                    "item {} is published; schedule for {scheduled_at} consumed",
                    self.id,
                );
            }
        }
        self
    }
}
