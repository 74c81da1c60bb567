//! Câu trả lời mẫu khi backend không phản hồi.

const FEVER: &str = "<strong>Common symptoms of fever include:</strong><br><br>
    • Body temperature above 100.4°F (38°C)<br>
    • Sweating and chills<br>
    • Headache<br>
    • Muscle aches<br>
    • Loss of appetite<br>
    • Weakness<br><br>
    💡 <em>Tip:</em> Stay hydrated and rest. If fever persists for more than 3 days or exceeds 103°F, consult a doctor.";

const BURN: &str = "<strong>First Aid for Burns:</strong><br><br>
    1. <strong>Cool the burn:</strong> Hold under cool running water for 10-20 minutes<br>
    2. Remove jewelry/tight items near the burn<br>
    3. Don't break blisters<br>
    4. Apply aloe vera or moisturizer<br>
    5. Cover with sterile bandage<br><br>
    ⚠️ <em>Seek immediate medical help for severe burns!</em>";

const DIABETES: &str = "<strong>Diabetes Prevention Tips:</strong><br><br>
    • Maintain healthy weight<br>
    • Exercise regularly (30 min/day)<br>
    • Eat balanced diet (more fiber, less sugar)<br>
    • Limit processed foods<br>
    • Stay hydrated<br>
    • Get regular checkups<br>
    • Manage stress levels<br><br>
    💪 <em>Small lifestyle changes can make a big difference!</em>";

const HEADACHE: &str = "<strong>Common Headache Information:</strong><br><br>
    🔹 <strong>Types:</strong> Tension, Migraine, Cluster<br><br>
    🔹 <strong>Common causes:</strong><br>
    • Stress and anxiety<br>
    • Dehydration<br>
    • Poor posture<br>
    • Eye strain<br>
    • Lack of sleep<br><br>
    🔹 <strong>Relief tips:</strong><br>
    • Rest in quiet, dark room<br>
    • Stay hydrated<br>
    • Apply cold/warm compress<br>
    • Gentle massage<br><br>
    <em>If headaches are severe or frequent, consult a doctor.</em>";

const COLD_FLU: &str = "<strong>Common Cold vs Flu:</strong><br><br>
    <strong>Common Cold symptoms:</strong><br>
    • Runny/stuffy nose<br>
    • Sore throat<br>
    • Cough<br>
    • Mild fatigue<br><br>
    <strong>Flu symptoms:</strong><br>
    • High fever<br>
    • Body aches<br>
    • Severe fatigue<br>
    • Dry cough<br><br>
    💊 <em>Treatment:</em> Rest, fluids, over-the-counter medications. Consult doctor if symptoms worsen.";

const GREETING: &str = "Hello! 😊 How can I assist you with your health questions today? \
    Feel free to ask about symptoms, conditions, or general health information.";

const THANKS: &str =
    "You're welcome! Stay healthy and feel free to ask if you have more questions. Take care! 🌟";

/// Keyword groups in priority order. The first group with any keyword
/// contained in the lower-cased input wins.
const KEYWORD_REPLIES: &[(&[&str], &str)] = &[
    (&["fever"], FEVER),
    (&["burn"], BURN),
    (&["diabetes"], DIABETES),
    (&["headache"], HEADACHE),
    (&["cold", "flu"], COLD_FLU),
    (&["hello", "hi"], GREETING),
    (&["thank"], THANKS),
];

pub fn keyword_reply(user_text: &str) -> String {
    let lower = user_text.to_lowercase();

    KEYWORD_REPLIES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|keyword| lower.contains(keyword)))
        .map(|(_, reply)| (*reply).to_string())
        .unwrap_or_else(|| demo_mode_reply(user_text))
}

fn demo_mode_reply(user_text: &str) -> String {
    format!(
        "I understand you're asking about: <strong>\"{}\"</strong><br><br>
    I'm currently in demo mode. Once connected to the backend, I'll be able to provide detailed information about:<br><br>
    • Symptoms and conditions<br>
    • First aid procedures<br>
    • Health tips<br>
    • Medicine information<br><br>
    Try asking about: <em>fever, burns, diabetes, headaches, cold, or flu!</em> 😊",
        escape_markup(user_text)
    )
}

/// Escapes user text before it is embedded as element text in reply markup.
/// Quotes are left alone: they are only special inside attributes.
fn escape_markup(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
