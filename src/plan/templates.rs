use crate::models::enums::IronFolicIntake;

/// Fixed domain copy for the care-action plans. English section lists
/// and Hindi narration strings are product content reviewed with field
/// health workers; reworded lines change counselling behavior, so the
/// text is reproduced here verbatim.
pub struct PlanTemplates;

impl PlanTemplates {
    /// Caregiver-facing summary line. The only place the numeric score
    /// and vitals appear; they never influence template selection.
    pub fn summary(
        score_percent: i64,
        category_upper: &str,
        hemoglobin: f64,
        bp_systolic: f64,
        bp_diastolic: f64,
    ) -> String {
        format!(
            "Risk score {score_percent} with {category_upper} risk profile. \
             Hemoglobin {hemoglobin} g/dL, BP {bp_systolic}/{bp_diastolic}.",
        )
    }

    /// Nutrition advice. The first line is the single per-record branch
    /// in the plan: affirmation for regular IFA intake, correction
    /// otherwise.
    pub fn nutrition(iron_folic_intake: &IronFolicIntake) -> Vec<String> {
        let ifa_line = if *iron_folic_intake == IronFolicIntake::Regular {
            "Continue daily IFA tablets with citrus juice for absorption."
        } else {
            "Restart daily IFA tablets; give 100 tablets and supervise intake weekly."
        };
        vec![
            ifa_line.into(),
            "Add green leafy vegetables (saag, spinach), jaggery and roasted chana twice daily."
                .into(),
            "Include protein: dal, eggs (if non-veg), curd or groundnut chikki to support fetal growth."
                .into(),
        ]
    }

    pub fn base_medications() -> Vec<String> {
        vec![
            "IFA tablet once daily till 180 doses completed.".into(),
            "Calcium 500 mg twice daily after meals, separate from IFA by 2 hours.".into(),
        ]
    }

    pub fn base_follow_up() -> Vec<String> {
        vec![
            "Home visit every 2 weeks to monitor BP, weight, fetal movements.".into(),
            "Document ANC in Mother & Child Protection (MCP) card and sync to app.".into(),
        ]
    }

    // ── High risk ──────────────────────────────────────────────────────

    pub fn high_priority_actions() -> Vec<String> {
        vec![
            "Refer to nearest FRU/CHC immediately for doctor review.".into(),
            "Arrange transport, inform MOIC and family guardian.".into(),
            "Prepare referral note with vitals, labs, complication history.".into(),
        ]
    }

    pub fn high_anc_schedule() -> Vec<String> {
        vec![
            "Doctor ANC within 48 hours, weekly follow-up thereafter.".into(),
            "Lab: Hb, blood sugar, urine protein, thyroid, ultrasound as advised.".into(),
        ]
    }

    pub fn high_extra_medication() -> String {
        "If Hb < 8 g/dL, plan IV iron at facility (consult doctor).".into()
    }

    pub fn high_extra_follow_up() -> Vec<String> {
        vec![
            "Daily phone check-in for danger signs (bleeding, swelling, headaches).".into(),
            "Trigger high-risk alert in app and assign to doctor.".into(),
        ]
    }

    pub fn high_counselling() -> Vec<String> {
        vec![
            "Explain danger signs in simple language; family must know when to rush.".into(),
            "Encourage rest, reduce heavy workload, ensure sleep of 8 hours.".into(),
            "Discuss birth preparedness: transport, blood donor, finance.".into(),
        ]
    }

    pub fn high_tts() -> String {
        "उच्च जोखिम मिला है। तुरंत डॉक्टर से मिलवाएं, आईएफ़ए नियमित कराएं और हर सप्ताह फॉलो-अप करें। परिवार को खतरे के लक्षण समझाएं और वाहन की व्यवस्था रखें।".into()
    }

    // ── Medium risk ────────────────────────────────────────────────────

    pub fn medium_priority_actions() -> Vec<String> {
        vec![
            "Reinforce IFA adherence; document weekly consumption.".into(),
            "Schedule facility ANC within 7 days for medical review.".into(),
            "Monitor BP, edema and fetal movements at every visit.".into(),
        ]
    }

    pub fn medium_anc_schedule() -> Vec<String> {
        vec![
            "Facility ANC every 2 weeks till delivery.".into(),
            "Repeat Hb test in 4 weeks; perform OGTT if blood sugar elevated.".into(),
        ]
    }

    pub fn medium_extra_follow_up() -> Vec<String> {
        vec![
            "Add reminder for TT dose if pending.".into(),
            "Use app alerts for lab follow-up and compliance tracking.".into(),
        ]
    }

    pub fn medium_counselling() -> Vec<String> {
        vec![
            "Educate on balanced diet, portion control, iron absorption tips.".into(),
            "Encourage moderate activity, pregnancy yoga or safe walks.".into(),
            "Discuss rest, mental wellbeing, partner support.".into(),
        ]
    }

    pub fn medium_tts() -> String {
        "मध्यम जोखिम दर्ज हुआ है। सात दिनों में सुविधा पर जाँच कराएं, आईएफ़ए और कैल्शियम नियमित लें और हर दो सप्ताह एएनसी करवाएं।".into()
    }

    // ── Low risk ───────────────────────────────────────────────────────

    pub fn low_priority_actions() -> Vec<String> {
        vec![
            "Continue routine ANC with focus on nutrition and rest.".into(),
            "Review danger signs during every counselling session.".into(),
        ]
    }

    pub fn low_anc_schedule() -> Vec<String> {
        vec![
            "ANC monthly till 7 months, fortnightly till 9 months, weekly in last month.".into(),
            "Ensure TT doses as per schedule, document in app.".into(),
        ]
    }

    pub fn low_counselling() -> Vec<String> {
        vec![
            "Promote birth preparedness and institutional delivery.".into(),
            "Encourage family support, stress-free environment.".into(),
            "Discuss newborn care and breastfeeding preparation.".into(),
        ]
    }

    pub fn low_tts() -> String {
        "जोखिम कम है, फिर भी नियमित एएनसी, पौष्टिक आहार और आईएफ़ए टैबलेट जारी रखें। परिवार को खतरे के लक्षण याद दिलाएं।".into()
    }
}
