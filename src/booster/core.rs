//! Provides `Booster` trait.

use crate::error::Result;

use std::ops::ControlFlow;


/// The trait [`Booster`](Booster) defines the standard framework of Boosting.
/// 
/// You need to implement [`Booster::preprocess`](Booster::preprocess),
/// [`Booster::boost`](Booster::boost), 
/// and [`Booster::postprocess`](Booster::postprocess)
/// to write a new boosting algorithm.
pub trait Booster {
    /// The combined hypothesis returned by [`Booster::run`].
    type Output;


    /// A main function that runs boosting algorithm.
    fn run(&mut self) -> Result<Self::Output> {
        self.preprocess()?;

        let mut round = 0;
        while let ControlFlow::Continue(()) = self.boost(round)? {
            round += 1;
        }

        self.postprocess()
    }


    /// Pre-processing for `self`.
    /// As you can see in [`Booster::run`](Booster::run),
    /// This method is called before the boosting process.
    fn preprocess(&mut self) -> Result<()>;


    /// Boosting step per round, starting from round `0`.
    /// This method returns 
    /// `ControlFlow::Continue(())` if another round follows,
    /// `ControlFlow::Break(n_rounds)` otherwise.  
    fn boost(&mut self, round: usize) -> Result<ControlFlow<usize>>;


    /// Post-processing.
    /// This method returns the combined hypothesis.
    fn postprocess(&mut self) -> Result<Self::Output>;


    /// Returns the name of the boosting algorithm.
    fn name(&self) -> &str {
        "Booster"
    }
}
