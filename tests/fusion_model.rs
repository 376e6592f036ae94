use fusionboost::prelude::*;
use fusionboost::weight_engine::classifier_weight;
use fusionboost::common::constants::ERROR_RATE_BIAS;


const TRIALS: [&str; 4] = ["s1/trial_1", "s1/trial_2", "s1/trial_3", "s1/trial_4"];


// face valence: [1, 1, 0, 0], face arousal: [1, 0, 1, 0]
fn face() -> FixedClassifier {
    FixedClassifier::new("face")
        .predictions(&TRIALS, &[1, 1, 0, 0], &[1, 0, 1, 0])
        .unwrap()
        .prediction("s1/trial_5", (true, false))
}


// EEG valence: [1, 0, 1, 0], EEG arousal: [1, 1, 0, 0]
fn eeg() -> FixedClassifier {
    FixedClassifier::new("EEG")
        .predictions(&TRIALS, &[1, 0, 1, 0], &[1, 1, 0, 0])
        .unwrap()
        .prediction("s1/trial_5", (false, true))
}


// valence: [1, 1, 1, 0], arousal: [1, 1, 0, 1]
fn labels() -> LabelTable {
    LabelTable::new()
        .with("s1/trial_1", (true, true))
        .with("s1/trial_2", (true, true))
        .with("s1/trial_3", (true, false))
        .with("s1/trial_4", (false, true))
        .with("s1/trial_5", (true, true))
}


fn trained(config: FusionConfig)
    -> FusionModel<FixedClassifier, FixedClassifier, LabelTable>
{
    let mut model = FusionModel::with_config(face(), eeg(), labels(), config);
    for trial in TRIALS {
        model.add_trial(trial).unwrap();
    }
    model.train().unwrap();
    model
}


/// Tests for `FusionModel`.
#[cfg(test)]
pub mod fusion_model_tests {
    use super::*;

    #[test]
    fn learns_the_reference_weights() {
        let model = trained(FusionConfig::new());
        let weights = model.weights();

        // Valence. Face misses trial 3, EEG misses trial 2.
        let face_err = 0.25 + ERROR_RATE_BIAS;
        let face_w = 0.5 * (1.0 - face_err) / face_err;
        assert!((weights.face_valence - face_w).abs() < 1e-9);
        assert!((weights.face_valence - 1.5).abs() < 1e-8);

        // Trial 2 was right for face, so its weight shrinks.
        let eeg_err = 0.25 * (-face_w).exp() + ERROR_RATE_BIAS;
        let eeg_w = classifier_weight(eeg_err);
        assert!((weights.eeg_valence - eeg_w).abs() < 1e-9);

        // Arousal. Face misses trials 2, 3, 4; EEG misses trial 4.
        let face_err = 0.75 + ERROR_RATE_BIAS;
        let face_w = classifier_weight(face_err);
        assert!((weights.face_arousal - face_w).abs() < 1e-9);

        let eeg_err = 0.25 * face_w.exp() + ERROR_RATE_BIAS;
        let eeg_w = classifier_weight(eeg_err);
        assert!((weights.eeg_arousal - eeg_w).abs() < 1e-9);

        let rates = model.error_rates();
        assert_eq!(rates.len(), 2);
        assert!((rates[0][0] - (0.25 + ERROR_RATE_BIAS)).abs() < 1e-15);
        assert!((rates[0][1] - (0.75 + ERROR_RATE_BIAS)).abs() < 1e-15);
    }


    #[test]
    fn normalized_update_changes_only_the_eeg_weights() {
        let plain = trained(FusionConfig::new());
        let model = trained(FusionConfig::new().normalize(true));
        let weights = model.weights();

        assert_eq!(weights.face_valence, plain.weights().face_valence);
        assert_eq!(weights.face_arousal, plain.weights().face_arousal);

        let face_w = weights.face_valence;
        let shrink = 0.25 * (-face_w).exp();
        let grow = 0.25 * face_w.exp();
        let eeg_err = shrink / (3.0 * shrink + grow) + ERROR_RATE_BIAS;
        assert!((weights.eeg_valence - classifier_weight(eeg_err)).abs() < 1e-9);
        assert!(weights.eeg_valence != plain.weights().eeg_valence);
    }


    #[test]
    fn log_odds_rule() {
        let model = trained(FusionConfig::new().rule(ConfidenceRule::LogOdds));
        let weights = model.weights();

        let face_err: f64 = 0.25 + ERROR_RATE_BIAS;
        let expected = ((1.0 - face_err) / face_err).ln() / 2.0;
        assert!((weights.face_valence - expected).abs() < 1e-9);

        // Worse than chance gets a negative vote.
        assert!(weights.face_arousal < 0.0);
    }


    #[test]
    fn forwards_trials_and_mode_to_both_classifiers() {
        let config = FusionConfig::new()
            .input_mode(InputMode::RawSignal);
        let mut model = FusionModel::with_config(face(), eeg(), labels(), config);
        model.add_trial("s1/trial_1").unwrap();
        model.add_trial("s1/trial_2").unwrap();
        model.add_trial("s1/trial_1").unwrap();

        assert_eq!(model.trials().len(), 3);
        assert_eq!(model.face().accumulated(), model.trials());
        assert_eq!(model.eeg().accumulated(), model.trials());
        assert_eq!(model.face().last_mode(), Some(InputMode::RawSignal));
        assert_eq!(model.eeg().last_mode(), Some(InputMode::RawSignal));

        model.train().unwrap();
        assert_eq!(model.face().train_calls(), 1);
        assert_eq!(model.eeg().train_calls(), 1);
    }


    #[test]
    fn one_input_mode_for_the_whole_lifecycle() {
        let config = FusionConfig::new()
            .input_mode(InputMode::RawSignal);
        let mut model = FusionModel::with_config(face(), eeg(), labels(), config);
        for trial in TRIALS { model.add_trial(trial).unwrap(); }
        model.train().unwrap();
        model.predict("s1/trial_5").unwrap();

        let mode = Some(model.config().input_mode);
        assert_eq!(mode, Some(InputMode::RawSignal));
        assert_eq!(model.face().last_mode(), mode);
        assert_eq!(model.eeg().last_mode(), mode);
        assert_eq!(model.face().last_predict_mode(), mode);
        assert_eq!(model.eeg().last_predict_mode(), mode);
    }


    #[test]
    fn weights_default_to_one_half_before_training() {
        let model = FusionModel::new(face(), eeg(), labels());
        assert!(!model.is_trained());
        assert_eq!(*model.weights(), FusionWeights::default());
        assert_eq!(model.weights().face_valence, 0.5);
        assert_eq!(model.weights().eeg_arousal, 0.5);

        // Equal weights and opposite votes give a score of exactly zero,
        // which is low.
        let trial = TrialRef::new("s1/trial_5");
        let predicted = model.predict_labels(&trial).unwrap();
        assert_eq!(predicted, LabelPair::new(false, false));
    }


    #[test]
    fn weighted_vote_decides_the_label() {
        let weights = FusionWeights {
            face_valence: 2.0,
            face_arousal: 0.5,
            eeg_valence: 0.5,
            eeg_arousal: 2.0,
        };
        let model = FusionModel::new(face(), eeg(), labels())
            .with_weights(weights);

        // Face votes +1 and EEG votes -1 on valence: 2 - 0.5 = 1.5 > 0.
        // Face votes -1 and EEG votes +1 on arousal: -0.5 + 2 = 1.5 > 0.
        let trial = TrialRef::new("s1/trial_5");
        let face_vote = LabelPair::new(true, false);
        let eeg_vote = LabelPair::new(false, true);
        assert_eq!(weights.score(Dimension::Valence, face_vote, eeg_vote), 1.5);
        let predicted = model.predict_labels(&trial).unwrap();
        assert_eq!(predicted, LabelPair::new(true, true));

        // The ground truth of trial 5 is (high, high).
        let (valence_correct, arousal_correct) = model.predict("s1/trial_5").unwrap();
        assert!(valence_correct);
        assert!(arousal_correct);
    }


    #[test]
    fn zero_score_is_low() {
        let weights = FusionWeights {
            face_valence: 1.25,
            face_arousal: 1.25,
            eeg_valence: 1.25,
            eeg_arousal: 1.25,
        };
        let face = LabelPair::new(true, false);
        let eeg = LabelPair::new(false, true);
        assert_eq!(weights.score(Dimension::Valence, face, eeg), 0.0);
        assert_eq!(weights.fuse(face, eeg).unwrap(), LabelPair::new(false, false));
    }


    #[test]
    fn nan_score_is_an_error() {
        let weights = FusionWeights {
            face_valence: f64::INFINITY,
            face_arousal: 1.0,
            eeg_valence: f64::INFINITY,
            eeg_arousal: 1.0,
        };
        let err = weights.fuse(
            LabelPair::new(true, true),
            LabelPair::new(false, true),
        ).unwrap_err();
        assert!(matches!(
            err,
            FusionError::NonFiniteScore { dimension: Dimension::Valence }
        ));

        // Agreeing infinite votes are still well defined.
        let fused = weights.fuse(
            LabelPair::new(true, true),
            LabelPair::new(true, true),
        ).unwrap();
        assert_eq!(fused, LabelPair::new(true, true));
    }


    #[test]
    fn predict_is_idempotent() {
        let model = trained(FusionConfig::new());
        for trial in TRIALS.iter().chain(["s1/trial_5"].iter()) {
            let first = model.predict(*trial).unwrap();
            let second = model.predict(*trial).unwrap();
            assert_eq!(first, second);
        }
        let before = *model.weights();
        let _ = model.evaluate(TRIALS).unwrap();
        assert_eq!(before, *model.weights());
    }


    #[test]
    fn evaluate_counts_correct_trials() {
        let model = trained(FusionConfig::new());
        let accuracy = model.evaluate(TRIALS).unwrap();
        assert_eq!(accuracy.n_trials, 4);

        let mut expected = Accuracy::new();
        for trial in TRIALS {
            let (v, a) = model.predict(trial).unwrap();
            expected.record(v, a);
        }
        assert_eq!(accuracy, expected);
    }


    #[test]
    fn train_runs_once() {
        let mut model = trained(FusionConfig::new());
        assert!(model.is_trained());
        assert!(matches!(model.train(), Err(FusionError::AlreadyTrained)));
        assert!(matches!(
            model.add_trial("s1/trial_5"),
            Err(FusionError::AlreadyTrained)
        ));
        assert_eq!(model.trials().len(), 4);
    }


    #[test]
    fn train_without_trials_fails() {
        let mut model = FusionModel::new(face(), eeg(), labels());
        assert!(matches!(model.train(), Err(FusionError::InvalidArgument(_))));
        assert!(!model.is_trained());
    }


    #[test]
    fn collaborator_failures_propagate() {
        let mut model = FusionModel::new(face(), eeg(), labels());
        let err = model.add_trial("s1/unknown").unwrap_err();
        assert!(matches!(err, FusionError::Collaborator(_)));
        assert!(model.trials().is_empty());

        let model = trained(FusionConfig::new());
        let err = model.predict("s1/unknown").unwrap_err();
        assert!(matches!(err, FusionError::Collaborator(_)));
    }


    #[test]
    fn missing_label_propagates() {
        let labels = LabelTable::new().with("s1/trial_1", (true, true));
        let mut model = FusionModel::new(face(), eeg(), labels);
        model.add_trial("s1/trial_1").unwrap();
        model.add_trial("s1/trial_2").unwrap();

        let err = model.train().unwrap_err();
        assert!(matches!(err, FusionError::Label { .. }));
        assert!(!model.is_trained());
    }


    #[test]
    fn perfect_eeg_is_degenerate() {
        // EEG arousal matches the ground truth on every trial.
        let labels = LabelTable::new()
            .with("s1/trial_1", (true, true))
            .with("s1/trial_2", (true, true))
            .with("s1/trial_3", (true, false))
            .with("s1/trial_4", (false, false));

        let mut model = FusionModel::new(face(), eeg(), labels.clone());
        for trial in TRIALS { model.add_trial(trial).unwrap(); }
        let weights = *model.train().unwrap();
        assert!(weights.eeg_arousal.is_finite());
        assert!(weights.eeg_arousal > 1e10);

        let config = FusionConfig::new()
            .degenerate(DegeneratePolicy::Strict);
        let mut model = FusionModel::with_config(face(), eeg(), labels, config);
        for trial in TRIALS { model.add_trial(trial).unwrap(); }
        let err = model.train().unwrap_err();
        assert!(matches!(
            err,
            FusionError::DegenerateErrorRate {
                modality: Modality::Eeg,
                dimension: Dimension::Arousal,
                ..
            }
        ));
        assert!(!model.is_trained());

        // A retry fails the same way without training the classifiers again.
        let err = model.train().unwrap_err();
        assert!(matches!(err, FusionError::DegenerateErrorRate { .. }));
        assert_eq!(model.face().train_calls(), 1);
        assert_eq!(model.eeg().train_calls(), 1);
    }


    #[test]
    fn mismatched_fixed_predictions_are_rejected() {
        let err = FixedClassifier::new("face")
            .predictions(&TRIALS, &[1, 1, 0], &[1, 0, 1, 0])
            .unwrap_err();
        assert!(matches!(err, FusionError::InvalidArgument(_)));

        let err = FixedClassifier::new("EEG")
            .predictions(&TRIALS, &[1, 0, 1, 0], &[1, 1, 0, 0, 1])
            .unwrap_err();
        assert!(matches!(err, FusionError::InvalidArgument(_)));
    }


    #[test]
    fn boxed_classifiers() {
        let face: Box<dyn SubClassifier> = Box::new(face());
        let eeg: Box<dyn SubClassifier> = Box::new(eeg());
        let mut model = FusionModel::new(face, eeg, labels());
        for trial in TRIALS { model.add_trial(trial).unwrap(); }
        model.train().unwrap();
        assert_eq!(model.face().name(), "face");
        assert!((model.weights().face_valence - 1.5).abs() < 1e-8);
    }


    #[test]
    fn config_from_json() {
        let path = std::env::temp_dir()
            .join(format!("fusionboost_{}_config.json", std::process::id()));
        std::fs::write(&path, r#"{"input_mode": "RawSignal", "normalize": true}"#)
            .unwrap();

        let config = FusionConfig::from_json_file(&path).unwrap();
        assert_eq!(config.input_mode, InputMode::RawSignal);
        assert!(config.normalize);
        assert_eq!(config.rule, ConfidenceRule::Ratio);
        assert_eq!(config.degenerate, DegeneratePolicy::Warn);
        std::fs::remove_file(path).unwrap();

        assert_eq!(FusionConfig::new(), FusionConfig::default());
        assert!(!FusionConfig::new().normalize);
    }
}
