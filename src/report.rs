//! Console report of a rule-induction run.
use colored::Colorize;

use std::time::Instant;

use crate::{
    error::Result,
    evaluation::{accuracy, classify_all},
    learner::Learner,
    rule::parse_rules,
    sample::{Row, Structure},
};

const FULL_WIDTH: usize = 60;
const STAT_WIDTH: usize = (FULL_WIDTH - 4) / 2;
const PREC_WIDTH: usize = 2;


/// The outcome of [`Report::run`].
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    /// The induced rules, in the order the learner emitted them.
    pub rules: Vec<String>,
    /// Percentage of test rows the rules classify correctly.
    pub accuracy: f64,
    /// Time spent inducing the rules, in milliseconds.
    pub millis: u128,
}


/// `Report` runs a learner on a training set,
/// applies the rules to a test set,
/// and prints the settings and the results to the console.
pub struct Report<'a, L> {
    learner:   &'a L,
    structure: &'a Structure,
    train:     &'a [Row],
    test:      &'a [Row],
    verbose:   bool,
}


impl<'a, L> Report<'a, L>
    where L: Learner
{
    /// Create a new instance of `Report`.
    pub fn new(
        learner:   &'a L,
        structure: &'a Structure,
        train:     &'a [Row],
        test:      &'a [Row],
    ) -> Self
    {
        Self { learner, structure, train, test, verbose: true, }
    }


    /// Print nothing if `verbose` is `false`.
    /// Default value is `true`.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }


    /// Returns the settings table.
    pub fn stats(&self) -> String {
        let header = format!(
            "{:=>FULL_WIDTH$}\n{:^FULL_WIDTH$}\n{:->FULL_WIDTH$}",
            "", "STATS".bold(), "",
        );
        let mut lines = vec![
            header,
            format!(
                "+ {:<STAT_WIDTH$}\t{:>STAT_WIDTH$}",
                "Learner".bold(),
                self.learner.name().bold().green(),
            ),
        ];

        if let Some(info) = self.learner.info() {
            lines.extend(info.into_iter().map(|(key, val)| {
                format!(
                    "    + {:<STAT_WIDTH$}\t{:>width$}",
                    key,
                    val.bold().yellow(),
                    width = STAT_WIDTH - 8
                )
            }));
        }

        lines.push(format!(
            "\
            + {:<STAT_WIDTH$}\t{:>STAT_WIDTH$}\n\
            + {:<STAT_WIDTH$}\t{:>STAT_WIDTH$}\n\
            + {:<STAT_WIDTH$}\t{:>STAT_WIDTH$}",
            "Columns".bold(),
            self.structure.len().to_string().bold().green(),
            "Train rows".bold(),
            self.train.len().to_string().bold().green(),
            "Test rows".bold(),
            self.test.len().to_string().bold().green(),
        ));
        lines.push(format!("{:=^FULL_WIDTH$}", ""));
        lines.join("\n")
    }


    /// Returns the results table.
    pub fn summary(&self, outcome: &Outcome) -> String {
        format!(
            "\
            + {:<STAT_WIDTH$}\t{:>STAT_WIDTH$}\n\
            + {:<STAT_WIDTH$}\t{:>STAT_WIDTH$}\n\
            + {:<STAT_WIDTH$}\t{:>STAT_WIDTH$}\n\
            {:=^FULL_WIDTH$}",
            "Rules".bold(),
            outcome.rules.len().to_string().bold().green(),
            "Accuracy (%)".bold(),
            format!("{:.PREC_WIDTH$}", outcome.accuracy).bold().cyan(),
            "Time".bold(),
            time_format(outcome.millis).bold().cyan(),
            "",
        )
    }


    /// Induce the rules, score them on the test set
    /// and print both tables.
    pub fn run(&self) -> Result<Outcome> {
        if self.verbose { println!("\n{}", self.stats()); }

        let now = Instant::now();
        let rules = self.learner.produce(self.train, self.structure)?;
        let millis = now.elapsed().as_millis();

        let parsed = parse_rules(&rules[..])?;
        let predicted = classify_all(self.test, self.structure, &parsed[..])?;
        let accuracy = accuracy(&predicted[..], self.test);

        let outcome = Outcome { rules, accuracy, millis, };
        if self.verbose { println!("{}\n", self.summary(&outcome)); }
        Ok(outcome)
    }
}


fn time_format(millisec: u128) -> String {
    if millisec < 1_000 {
        return format!("  0.{:0>3}s", millisec);
    }
    let sec = millisec / 1_000;
    let millisec = millisec % 1_000;
    if sec < 60 {
        return format!(" {:0>2}.{:0>3}s", sec, millisec);
    }
    let min = sec / 60;
    let sec = sec % 60;
    format!(" {:0>2}m {:0>2}s", min, sec)
}
