use colored::Colorize;
use rand::prelude::*;

use crate::{
    TrialRef,
    error::{FusionError, Result},
};

const WIDTH: usize = 9;
const DEFAULT_SEED: u64 = 1234;


/// Splits trials into a random training set of a given size
/// and a test set holding the rest.
/// The randomness is driven by an explicit seed only.
///
/// # Example
/// ```no_run
/// use fusionboost::prelude::*;
///
/// let trials = (1..=40)
///     .map(|id| TrialRef::new(format!("dataset/DEAP/1/trial_{id}/")))
///     .collect::<Vec<_>>();
/// let (train, test) = TrialSplit::new(trials)
///     .n_train(20)
///     .seed(777)
///     .split()?;
/// assert_eq!(train.len(), 20);
/// assert_eq!(test.len(), 20);
/// # Ok::<(), fusionboost::FusionError>(())
/// ```
#[derive(Debug, Clone)]
pub struct TrialSplit {
    trials: Vec<TrialRef>,
    n_train: usize,
    seed: u64,
    verbose: bool,
}


impl TrialSplit {
    /// Construct a new instance of `TrialSplit`.
    /// By default, half of the trials (rounded down) are used for training.
    pub fn new<I, T>(trials: I) -> Self
        where I: IntoIterator<Item = T>,
              T: Into<TrialRef>,
    {
        let trials = trials.into_iter()
            .map(Into::into)
            .collect::<Vec<_>>();
        let n_train = trials.len() / 2;
        Self { trials, n_train, seed: DEFAULT_SEED, verbose: false }
    }


    /// Set the number of training trials.
    pub fn n_train(mut self, n_train: usize) -> Self {
        self.n_train = n_train;
        self
    }


    /// Set the seed of the randomness for shuffling.
    /// Default vaule is `1234.`
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }


    /// Set the verbose parameter.
    /// If `true`, `split` prints the size of both sets.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }


    /// Returns `(train, test)`.
    /// The test set keeps the original order of the trials.
    pub fn split(self) -> Result<(Vec<TrialRef>, Vec<TrialRef>)> {
        let n_trials = self.trials.len();
        if self.n_train > n_trials {
            let message = format!(
                "cannot draw {} training trials out of {n_trials}",
                self.n_train,
            );
            return Err(FusionError::InvalidArgument(message));
        }

        let mut ix = (0..n_trials).collect::<Vec<usize>>();
        let mut rng = StdRng::seed_from_u64(self.seed);
        ix.shuffle(&mut rng);

        let mut is_train = vec![false; n_trials];
        ix.iter()
            .take(self.n_train)
            .for_each(|&i| { is_train[i] = true; });

        let train = ix.into_iter()
            .take(self.n_train)
            .map(|i| self.trials[i].clone())
            .collect::<Vec<_>>();
        let test = self.trials.into_iter()
            .zip(is_train)
            .filter_map(|(t, flag)| (!flag).then_some(t))
            .collect::<Vec<_>>();

        if self.verbose {
            println!(
                "{}    {}    {}",
                format!("  [seed {:>WIDTH$}]", self.seed).bold().red(),
                format!("[TRAIN {:>WIDTH$}]", train.len()).bold().green(),
                format!("[TEST {:>WIDTH$}]", test.len()).bold().yellow(),
            );
        }
        Ok((train, test))
    }
}


/// Iterates over `(train, validation)` pairs,
/// holding out each trial exactly once.
///
/// # Example
/// ```no_run
/// use fusionboost::prelude::*;
///
/// let trials = (1..=20)
///     .map(|id| TrialRef::new(format!("dataset/MAHNOB_HCI/1/trial_{id}/")))
///     .collect::<Vec<_>>();
/// for (train, validation) in LeaveOneOut::new(&trials) {
///     assert_eq!(train.len(), 19);
///     assert!(!train.contains(&validation));
/// }
/// ```
#[derive(Debug, Clone)]
pub struct LeaveOneOut<'a> {
    trials: &'a [TrialRef],
    current: usize,
    verbose: bool,
}


impl<'a> LeaveOneOut<'a> {
    /// Construct a new instance of `LeaveOneOut`.
    pub fn new(trials: &'a [TrialRef]) -> Self {
        Self { trials, current: 0, verbose: false }
    }


    /// Set the verbose parameter.
    /// If `true`, `LeaveOneOut` prints the held-out trial
    /// when generating a train/validation pair.
    /// Default vaule is `false.`
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}


impl Iterator for LeaveOneOut<'_> {
    type Item = (Vec<TrialRef>, TrialRef);
    fn next(&mut self) -> Option<Self::Item> {
        let validation = self.trials.get(self.current)?.clone();
        let train = self.trials.iter()
            .enumerate()
            .filter_map(|(i, t)| (i != self.current).then(|| t.clone()))
            .collect::<Vec<_>>();
        self.current += 1;

        if self.verbose {
            println!(
                "{}    {}    {}",
                format!("  [{: >3}'th fold]", self.current).bold().red(),
                format!("[TRAIN {:>WIDTH$}]", train.len()).bold().green(),
                format!("[HOLD OUT {validation}]").bold().yellow(),
            );
        }

        Some((train, validation))
    }


    fn size_hint(&self) -> (usize, Option<usize>) {
        let rest = self.trials.len().saturating_sub(self.current);
        (rest, Some(rest))
    }
}
