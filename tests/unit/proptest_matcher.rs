//! Property-based tests for the matcher module
//!
//! Uses proptest to verify properties that should hold for all inputs.

use govmatch::core::models::{EligibilityRule, EmployeeBand, Profile, Scheme, UserType};
use govmatch::core::services::{CRITERIA_COUNT, MatchPolicy, ResultOrder, evaluate, evaluate_all};
use proptest::prelude::*;

use crate::common::scheme;

const STAGES: [&str; 4] = ["Ideation", "Validation", "Early Traction", "Scaling"];
const INDUSTRIES: [&str; 4] = ["FinTech", "EdTech", "Agriculture", "Retail"];
const LOCATIONS: [&str; 3] = ["Metro City", "Tier 2 City", "Rural Area"];

fn label(options: &'static [&'static str]) -> impl Strategy<Value = Option<String>> {
    prop::option::of(prop::sample::select(options).prop_map(String::from))
}

fn labels(options: &'static [&'static str]) -> impl Strategy<Value = Vec<String>> {
    prop::sample::subsequence(options, 0..=options.len())
        .prop_map(|v| v.into_iter().map(String::from).collect())
}

fn arb_profile() -> impl Strategy<Value = Profile> {
    (
        label(&STAGES),
        label(&INDUSTRIES),
        label(&INDUSTRIES),
        prop::option::of(0u64..500),
        label(&LOCATIONS),
        prop::option::of(prop::bool::ANY),
    )
        .prop_map(|(stage, industry, industry_type, employees, location, support)| Profile {
            startup_stage: stage,
            industry,
            industry_type,
            number_of_employees: employees,
            location,
            existing_government_support: support.map(|s| if s { "Yes" } else { "No" }.to_string()),
            ..Profile::new("u1", UserType::Startup)
        })
}

fn arb_rule() -> impl Strategy<Value = EligibilityRule> {
    const BANDS: [&str; 5] = ["1-5", "6-20", "21-50", "51-100", "More than 100"];
    (
        labels(&STAGES),
        labels(&INDUSTRIES),
        labels(&BANDS),
        labels(&LOCATIONS),
        prop::option::of(prop::bool::ANY),
    )
        .prop_map(|(stages, industries, bands, locations, support)| EligibilityRule {
            startup_stages: stages,
            industry_types: industries,
            annual_revenue: Vec::new(),
            employee_ranges: bands,
            locations,
            existing_support: support,
        })
}

proptest! {
    /// Non-startups are never eligible, whatever the rule
    #[test]
    fn non_startup_never_eligible(profile in arb_profile(), rule in arb_rule()) {
        let investor = Profile { user_type: UserType::Investor, ..profile };
        let evaluation = evaluate(&investor, &rule, MatchPolicy::default());
        prop_assert!(!evaluation.eligible);
        prop_assert_eq!(evaluation.match_count, 0);
        prop_assert!(evaluation.details.is_empty());
    }

    /// An unconstrained rule matches every criterion for any startup
    #[test]
    fn empty_rule_matches_everything(profile in arb_profile()) {
        let evaluation = evaluate(&profile, &EligibilityRule::default(), MatchPolicy::default());
        prop_assert_eq!(evaluation.match_count, CRITERIA_COUNT);
        prop_assert!(evaluation.eligible);
    }

    /// Eligibility is exactly "match count reaches the threshold"
    #[test]
    fn eligible_iff_threshold_reached(
        profile in arb_profile(),
        rule in arb_rule(),
        required in 1usize..=CRITERIA_COUNT,
    ) {
        let policy = MatchPolicy::new(required).unwrap();
        let evaluation = evaluate(&profile, &rule, policy);
        prop_assert!(evaluation.match_count <= CRITERIA_COUNT);
        prop_assert_eq!(evaluation.details.len(), CRITERIA_COUNT);
        prop_assert_eq!(
            evaluation.match_count,
            evaluation.details.iter().filter(|d| d.matched).count()
        );
        prop_assert_eq!(evaluation.eligible, evaluation.match_count >= required);
    }

    /// Every count lands in the band whose label round-trips through parsing
    #[test]
    fn band_labels_parse_back(count in 0u64..100_000) {
        let band = EmployeeBand::from_count(count);
        prop_assert_eq!(band.label().parse::<EmployeeBand>().unwrap(), band);
    }

    /// Setting the legacy industry field never changes a result when the current one is set
    #[test]
    fn current_industry_shadows_legacy(
        profile in arb_profile(),
        rule in arb_rule(),
        legacy in label(&INDUSTRIES),
    ) {
        prop_assume!(profile.industry.is_some());
        let shadowed = Profile { industry_type: legacy, ..profile.clone() };
        let policy = MatchPolicy::default();
        prop_assert_eq!(evaluate(&profile, &rule, policy), evaluate(&shadowed, &rule, policy));
    }

    /// Sorting reorders results but never changes a verdict
    #[test]
    fn ordering_preserves_verdicts(profile in arb_profile(), rules in prop::collection::vec(arb_rule(), 0..8)) {
        let schemes: Vec<Scheme> = rules
            .into_iter()
            .enumerate()
            .map(|(i, rule)| scheme(&format!("SCH-{i}"), rule, 0))
            .collect();
        let policy = MatchPolicy::default();

        let given = evaluate_all(&profile, &schemes, policy, ResultOrder::AsGiven);
        prop_assert_eq!(given.len(), schemes.len());
        for (result, scheme) in given.iter().zip(&schemes) {
            prop_assert_eq!(&result.scheme.id, &scheme.id);
        }

        let by_matches = evaluate_all(&profile, &schemes, policy, ResultOrder::MostMatches);
        prop_assert!(by_matches.windows(2).all(|w| w[0].evaluation.match_count >= w[1].evaluation.match_count));

        let eligible_first = evaluate_all(&profile, &schemes, policy, ResultOrder::EligibleFirst);
        prop_assert!(eligible_first.windows(2).all(|w| w[0].evaluation.eligible || !w[1].evaluation.eligible));
        for result in &eligible_first {
            let original = given.iter().find(|g| g.scheme.id == result.scheme.id).unwrap();
            prop_assert_eq!(&original.evaluation, &result.evaluation);
        }
    }
}
