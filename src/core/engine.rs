//! GPA conversion and aggregation engine
//!
//! The engine is a single-pass, side-effect-free transform: course records
//! plus a grading scale and institutional policy in, three GPA figures,
//! per-course contributions, and policy warnings out. It never fails for
//! well-typed input; degenerate data (unknown grades, zero credits, empty
//! scales) degrades to documented fallbacks instead of erroring.

use crate::core::models::{
    CalculationResult, CourseDetail, CourseRecord, CourseType, CreditSystem, GpaBreakdown,
    GradingScale, InstitutionalSettings, SimpleCalculation, SimpleCourseDetail,
};

/// Quarter hours to semester hours.
pub const QUARTER_TO_SEMESTER: f64 = 0.67;

/// Trimester hours to semester hours.
pub const TRIMESTER_TO_SEMESTER: f64 = 0.75;

/// Rigor rating treated as neutral: a rating of 3 with a 1.0 adjustment
/// factor leaves grade points unchanged.
pub const NEUTRAL_RIGOR: f64 = 3.0;

/// How far bonuses and rigor may push a course above the scale ceiling.
pub const BONUS_CAP_MARGIN: f64 = 2.0;

/// Round to 1 decimal place (credit values).
#[must_use]
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Round to 2 decimal places (points and GPA values).
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Bucket GPA: `points / credits` rounded to 2 decimals, or `None` when
/// the bucket holds no credits. Never divides by zero.
fn bucket_gpa(points: f64, credits: f64) -> Option<f64> {
    (credits > 0.0).then(|| round2(points / credits))
}

/// Normalize a course's credit value into semester hours.
///
/// Only transfer courses with a stated credit system and a usable
/// (non-zero) original credit count are converted; everything else keeps
/// the institution-reported value. Returns the converted credits and, for
/// quarter/trimester conversions, a warning naming original → converted.
fn normalize_credits(course: &CourseRecord) -> (f64, Option<String>) {
    let original = course.original_credits.filter(|oc| *oc != 0.0);

    match (course.is_transfer, course.credit_system, original) {
        (true, Some(CreditSystem::Quarter), Some(oc)) => {
            let converted = round1(oc * QUARTER_TO_SEMESTER);
            let warning = format!(
                "{}: Credits converted from quarter system ({oc} → {converted})",
                course.name
            );
            (converted, Some(warning))
        }
        (true, Some(CreditSystem::Trimester), Some(oc)) => {
            let converted = round1(oc * TRIMESTER_TO_SEMESTER);
            let warning = format!(
                "{}: Credits converted from trimester system ({oc} → {converted})",
                course.name
            );
            (converted, Some(warning))
        }
        (true, Some(CreditSystem::Semester), Some(oc)) => (oc, None),
        _ => (course.credits, None),
    }
}

/// Adjust a course's base grade points for type bonuses and transfer rigor.
///
/// Returns the adjusted points (pre-cap) and a warning when a rigor
/// multiplier other than exactly 1 was applied.
fn adjust_grade_points(
    course: &CourseRecord,
    base_points: f64,
    settings: &InstitutionalSettings,
) -> (f64, Option<String>) {
    let mut points = base_points;

    // Type bonuses are mutually exclusive per course and additive
    match course.course_type {
        CourseType::Honors => points += settings.honors_bonus_points,
        CourseType::Ap => points += settings.ap_bonus_points,
        CourseType::Core | CourseType::Elective => {}
    }

    let mut warning = None;
    if course.is_transfer {
        if let Some(rigor) = course.rigor_rating.filter(|r| *r != 0.0) {
            let multiplier = (rigor / NEUTRAL_RIGOR) * settings.rigor_adjustment;
            points *= multiplier;

            if (multiplier - 1.0).abs() > f64::EPSILON {
                warning = Some(format!(
                    "{}: Rigor adjustment applied ({multiplier:.2}x) based on institutional rating",
                    course.name
                ));
            }
        }
    }

    (points, warning)
}

/// Compute institutional, transfer, and cumulative GPA figures for a set
/// of course records under the given scale and policy settings.
///
/// Pure and deterministic: identical input yields identical output. The
/// engine performs no I/O, never panics for well-typed input, and absorbs
/// degenerate data (unknown grades score 0, zero-credit buckets yield
/// `None` GPAs, an empty scale skips the cap).
#[must_use]
pub fn compute_gpa(
    courses: &[CourseRecord],
    scale: &GradingScale,
    settings: &InstitutionalSettings,
) -> CalculationResult {
    let max_points = scale.max_points();

    let mut institutional_points = 0.0;
    let mut institutional_credits = 0.0;
    let mut transfer_points = 0.0;
    let mut transfer_credits = 0.0;
    let mut total_points = 0.0;
    let mut total_credits = 0.0;

    let mut course_details = Vec::with_capacity(courses.len());
    let mut warnings = Vec::new();

    for course in courses {
        if settings.core_subjects_only && course.course_type == CourseType::Elective {
            continue;
        }

        let (converted_credits, conversion_warning) = normalize_credits(course);
        if let Some(w) = conversion_warning {
            warnings.push(w);
        }

        let base_points = scale.points_for(&course.grade).unwrap_or(0.0);
        let (mut adjusted_points, rigor_warning) =
            adjust_grade_points(course, base_points, settings);
        if let Some(w) = rigor_warning {
            warnings.push(w);
        }

        // Bonuses/rigor may push a course above the scale ceiling, but
        // only by the fixed margin
        if let Some(max) = max_points {
            adjusted_points = adjusted_points.min(max + BONUS_CAP_MARGIN);
        }

        let quality_points = adjusted_points * converted_credits;

        if course.is_transfer {
            transfer_points += quality_points;
            transfer_credits += converted_credits;
        } else {
            institutional_points += quality_points;
            institutional_credits += converted_credits;
        }

        if !course.is_transfer || settings.include_transfer_in_gpa {
            total_points += quality_points;
            total_credits += converted_credits;
        }

        course_details.push(CourseDetail {
            course: course.clone(),
            converted_credits,
            adjusted_grade_points: round2(adjusted_points),
            quality_points: round2(quality_points),
        });
    }

    if transfer_credits > 0.0 && !settings.include_transfer_in_gpa {
        warnings.push(
            "Transfer credits are excluded from cumulative GPA calculation per institutional policy"
                .to_string(),
        );
    }

    if transfer_credits > institutional_credits * 2.0 {
        warnings.push(
            "Transfer credits significantly exceed institutional credits - verify transfer limits"
                .to_string(),
        );
    }

    CalculationResult {
        institutional: bucket_gpa(institutional_points, institutional_credits),
        transfer: bucket_gpa(transfer_points, transfer_credits),
        cumulative: bucket_gpa(total_points, total_credits),
        breakdown: GpaBreakdown {
            total_credits,
            transfer_credits,
            institutional_credits,
            quality_points: round2(total_points),
            transfer_quality_points: round2(transfer_points),
            institutional_quality_points: round2(institutional_points),
        },
        course_details,
        warnings,
    }
}

/// Compute a single-bucket GPA with no transfer policy, bonuses, or
/// warnings: scale lookup, quality points, one average.
#[must_use]
pub fn compute_simple_gpa(courses: &[CourseRecord], scale: &GradingScale) -> SimpleCalculation {
    let mut total_points = 0.0;
    let mut total_credits = 0.0;
    let mut course_details = Vec::with_capacity(courses.len());

    for course in courses {
        let grade_points = scale.points_for(&course.grade).unwrap_or(0.0);
        let quality_points = grade_points * course.credits;

        total_points += quality_points;
        total_credits += course.credits;

        course_details.push(SimpleCourseDetail {
            course: course.clone(),
            grade_points,
            quality_points: round2(quality_points),
        });
    }

    SimpleCalculation {
        gpa: bucket_gpa(total_points, total_credits),
        total_credits,
        total_quality_points: round2(total_points),
        course_details,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::scales;

    fn four_point_scale() -> GradingScale {
        scales::standard_four_point()
    }

    fn course(id: &str, name: &str, credits: f64, grade: &str) -> CourseRecord {
        CourseRecord::new(id, name, credits, grade, "Fall 2024")
    }

    #[test]
    fn single_institutional_course_sets_all_buckets() {
        let courses = vec![course("1", "Biology", 3.0, "A")];
        let result = compute_gpa(
            &courses,
            &four_point_scale(),
            &InstitutionalSettings::default(),
        );

        assert_eq!(result.institutional, Some(4.0));
        assert_eq!(result.cumulative, Some(4.0));
        assert_eq!(result.transfer, None);
        assert!((result.breakdown.total_credits - 3.0).abs() < f64::EPSILON);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn quarter_transfer_course_converts_and_computes() {
        let courses = vec![course("1", "Calculus", 4.0, "B").as_transfer(
            "Foothill College",
            4.0,
            CreditSystem::Quarter,
            3.0,
        )];
        let result = compute_gpa(
            &courses,
            &four_point_scale(),
            &InstitutionalSettings::default(),
        );

        let detail = &result.course_details[0];
        assert!((detail.converted_credits - 2.7).abs() < f64::EPSILON);
        assert!((detail.adjusted_grade_points - 3.0).abs() < f64::EPSILON);
        assert!((detail.quality_points - 8.1).abs() < f64::EPSILON);
        assert_eq!(result.transfer, Some(3.0));
        assert_eq!(result.cumulative, Some(3.0));
        assert_eq!(result.institutional, None);
    }

    #[test]
    fn trimester_conversion_is_exact() {
        let courses = vec![course("1", "History", 4.0, "A").as_transfer(
            "Carleton",
            4.0,
            CreditSystem::Trimester,
            3.0,
        )];
        let result = compute_gpa(
            &courses,
            &four_point_scale(),
            &InstitutionalSettings::default(),
        );

        assert!((result.course_details[0].converted_credits - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn conversion_emits_warning_naming_values() {
        let courses = vec![course("1", "Calculus", 4.0, "B").as_transfer(
            "Foothill College",
            4.0,
            CreditSystem::Quarter,
            3.0,
        )];
        let result = compute_gpa(
            &courses,
            &four_point_scale(),
            &InstitutionalSettings::default(),
        );

        assert!(result
            .warnings
            .iter()
            .any(|w| w == "Calculus: Credits converted from quarter system (4 → 2.7)"));
    }

    #[test]
    fn semester_transfer_uses_original_credits_without_warning() {
        let courses = vec![course("1", "Writing", 3.0, "A").as_transfer(
            "State College",
            4.0,
            CreditSystem::Semester,
            3.0,
        )];
        let result = compute_gpa(
            &courses,
            &four_point_scale(),
            &InstitutionalSettings::default(),
        );

        assert!((result.course_details[0].converted_credits - 4.0).abs() < f64::EPSILON);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn transfer_without_credit_system_keeps_reported_credits() {
        let mut transfer = course("1", "Drawing", 3.0, "B");
        transfer.is_transfer = true;
        transfer.original_credits = Some(5.0);
        // No credit system stated: the reported value stands

        let result = compute_gpa(
            &[transfer],
            &four_point_scale(),
            &InstitutionalSettings::default(),
        );

        assert!((result.course_details[0].converted_credits - 3.0).abs() < f64::EPSILON);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn zero_original_credits_treated_as_absent() {
        let courses = vec![course("1", "Seminar", 2.0, "A").as_transfer(
            "Somewhere",
            0.0,
            CreditSystem::Quarter,
            3.0,
        )];
        let result = compute_gpa(
            &courses,
            &four_point_scale(),
            &InstitutionalSettings::default(),
        );

        assert!((result.course_details[0].converted_credits - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn neutral_rigor_is_exactly_one_and_silent() {
        let courses = vec![course("1", "Algebra", 3.0, "B").as_transfer(
            "State College",
            3.0,
            CreditSystem::Semester,
            3.0,
        )];
        let settings = InstitutionalSettings::default();
        let result = compute_gpa(&courses, &four_point_scale(), &settings);

        assert!((result.course_details[0].adjusted_grade_points - 3.0).abs() < f64::EPSILON);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn rigor_adjustment_scales_points_and_warns() {
        let courses = vec![course("1", "Analysis", 3.0, "B").as_transfer(
            "Rigorous Tech",
            3.0,
            CreditSystem::Semester,
            4.5,
        )];
        let result = compute_gpa(
            &courses,
            &four_point_scale(),
            &InstitutionalSettings::default(),
        );

        // 3.0 * (4.5 / 3) = 4.5
        assert!((result.course_details[0].adjusted_grade_points - 4.5).abs() < f64::EPSILON);
        assert!(result
            .warnings
            .iter()
            .any(|w| w == "Analysis: Rigor adjustment applied (1.50x) based on institutional rating"));
    }

    #[test]
    fn adjusted_points_capped_at_scale_ceiling_plus_margin() {
        let courses = vec![course("1", "Proofs", 3.0, "A")
            .with_type(CourseType::Ap)
            .as_transfer("Rigorous Tech", 3.0, CreditSystem::Semester, 5.0)];
        let settings = InstitutionalSettings {
            ap_bonus_points: 3.0,
            ..InstitutionalSettings::default()
        };

        let result = compute_gpa(&courses, &four_point_scale(), &settings);

        // (4.0 + 3.0) * (5/3) = 11.67, capped to 4.0 + 2.0
        assert!((result.course_details[0].adjusted_grade_points - 6.0).abs() < f64::EPSILON);
    }

    #[test]
    fn honors_and_ap_bonuses_are_additive_and_exclusive() {
        let courses = vec![
            course("1", "Honors Lit", 3.0, "B").with_type(CourseType::Honors),
            course("2", "AP Physics", 3.0, "B").with_type(CourseType::Ap),
        ];
        let result = compute_gpa(
            &courses,
            &four_point_scale(),
            &InstitutionalSettings::default(),
        );

        assert!((result.course_details[0].adjusted_grade_points - 3.5).abs() < f64::EPSILON);
        assert!((result.course_details[1].adjusted_grade_points - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn core_only_filter_drops_electives_entirely() {
        let courses = vec![
            course("1", "Composition", 3.0, "A"),
            course("2", "Pottery", 3.0, "A").with_type(CourseType::Elective),
        ];
        let settings = InstitutionalSettings {
            core_subjects_only: true,
            ..InstitutionalSettings::default()
        };

        let result = compute_gpa(&courses, &four_point_scale(), &settings);

        assert_eq!(result.course_details.len(), 1);
        assert_eq!(result.course_details[0].course.id, "1");
        assert!((result.breakdown.total_credits - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn excluded_transfer_warns_and_stays_out_of_cumulative() {
        let courses = vec![
            course("1", "Biology", 3.0, "A"),
            course("2", "Chemistry", 3.0, "A").as_transfer(
                "State College",
                3.0,
                CreditSystem::Semester,
                3.0,
            ),
        ];
        let settings = InstitutionalSettings {
            include_transfer_in_gpa: false,
            ..InstitutionalSettings::default()
        };

        let result = compute_gpa(&courses, &four_point_scale(), &settings);

        assert!((result.breakdown.total_credits - 3.0).abs() < f64::EPSILON);
        assert!((result.breakdown.transfer_credits - 3.0).abs() < f64::EPSILON);
        assert!(result.warnings.iter().any(|w| w
            == "Transfer credits are excluded from cumulative GPA calculation per institutional policy"));
    }

    #[test]
    fn heavy_transfer_load_triggers_limit_warning() {
        let courses = vec![
            course("1", "Biology", 3.0, "A"),
            course("2", "Chemistry", 12.0, "A").as_transfer(
                "State College",
                12.0,
                CreditSystem::Semester,
                3.0,
            ),
        ];
        let result = compute_gpa(
            &courses,
            &four_point_scale(),
            &InstitutionalSettings::default(),
        );

        assert!(result.warnings.iter().any(|w| w
            == "Transfer credits significantly exceed institutional credits - verify transfer limits"));
    }

    #[test]
    fn unknown_grade_scores_zero_but_credits_count() {
        let courses = vec![course("1", "Mystery", 3.0, "Z"), course("2", "Biology", 3.0, "A")];
        let result = compute_gpa(
            &courses,
            &four_point_scale(),
            &InstitutionalSettings::default(),
        );

        assert!((result.course_details[0].adjusted_grade_points).abs() < f64::EPSILON);
        // The zero lowers the average rather than nulling it
        assert_eq!(result.institutional, Some(2.0));
    }

    #[test]
    fn computed_zero_gpa_is_some_not_none() {
        let courses = vec![course("1", "Failed", 3.0, "F")];
        let result = compute_gpa(
            &courses,
            &four_point_scale(),
            &InstitutionalSettings::default(),
        );

        assert_eq!(result.institutional, Some(0.0));
        assert_eq!(result.cumulative, Some(0.0));
    }

    #[test]
    fn empty_input_yields_all_null_gpas() {
        let result = compute_gpa(
            &[],
            &four_point_scale(),
            &InstitutionalSettings::default(),
        );

        assert_eq!(result.institutional, None);
        assert_eq!(result.transfer, None);
        assert_eq!(result.cumulative, None);
        assert!(result.course_details.is_empty());
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn empty_scale_skips_cap_and_scores_zero() {
        let scale = GradingScale::new("Empty".to_string(), crate::core::models::ScaleType::Letter);
        let courses = vec![course("1", "Biology", 3.0, "A")];
        let result = compute_gpa(&courses, &scale, &InstitutionalSettings::default());

        assert_eq!(result.institutional, Some(0.0));
    }

    #[test]
    fn engine_is_deterministic() {
        let courses = vec![
            course("1", "Biology", 3.0, "A"),
            course("2", "Calculus", 4.0, "B+").as_transfer(
                "Foothill College",
                4.0,
                CreditSystem::Quarter,
                4.0,
            ),
        ];
        let settings = InstitutionalSettings::default();
        let scale = four_point_scale();

        let first = compute_gpa(&courses, &scale, &settings);
        let second = compute_gpa(&courses, &scale, &settings);
        assert_eq!(first, second);
    }

    #[test]
    fn per_course_warnings_precede_aggregate_warnings() {
        let courses = vec![course("1", "Calculus", 4.0, "B").as_transfer(
            "Foothill College",
            4.0,
            CreditSystem::Quarter,
            4.5,
        )];
        let settings = InstitutionalSettings {
            include_transfer_in_gpa: false,
            ..InstitutionalSettings::default()
        };

        let result = compute_gpa(&courses, &four_point_scale(), &settings);

        assert_eq!(result.warnings.len(), 4);
        assert!(result.warnings[0].contains("converted from quarter system"));
        assert!(result.warnings[1].contains("Rigor adjustment applied"));
        assert!(result.warnings[2].contains("excluded from cumulative GPA"));
        assert!(result.warnings[3].contains("exceed institutional credits"));
    }

    #[test]
    fn simple_gpa_single_bucket() {
        let courses = vec![
            course("1", "Biology", 3.0, "A"),
            course("2", "Chemistry", 3.0, "B"),
        ];
        let result = compute_simple_gpa(&courses, &four_point_scale());

        assert_eq!(result.gpa, Some(3.5));
        assert!((result.total_credits - 6.0).abs() < f64::EPSILON);
        assert!((result.total_quality_points - 21.0).abs() < f64::EPSILON);
        assert_eq!(result.course_details.len(), 2);
    }

    #[test]
    fn simple_gpa_empty_input_is_none() {
        let result = compute_simple_gpa(&[], &four_point_scale());
        assert_eq!(result.gpa, None);
        assert!((result.total_credits).abs() < f64::EPSILON);
    }
}
