//! Static catalogs for the wellness chatbot: response templates,
//! affirmation banks, mindfulness exercises, and mood-boosting activities.
//!
//! Tables are immutable and statically initialized; selection is a uniform
//! draw by the caller-supplied random source.

use serde::Serialize;

use crate::mood::Emotion;

/// One guided mindfulness exercise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Exercise {
    pub name: &'static str,
    pub description: &'static str,
    pub duration: &'static str,
    pub benefits: &'static str,
}

impl Exercise {
    /// Whether this exercise targets anxiety or stress, per its benefits text.
    pub(crate) fn targets_anxiety_or_stress(&self) -> bool {
        let benefits = self.benefits.to_lowercase();
        benefits.contains("anxiety") || benefits.contains("stress")
    }
}

pub(crate) const MINDFULNESS_EXERCISES: &[Exercise] = &[
    Exercise {
        name: "4-7-8 Breathing",
        description: "Breathe in for 4 counts, hold for 7, exhale for 8. Repeat 4 times.",
        duration: "2 minutes",
        benefits: "Reduces anxiety and promotes relaxation",
    },
    Exercise {
        name: "5-4-3-2-1 Grounding",
        description: "Name 5 things you see, 4 you can touch, 3 you hear, 2 you smell, 1 you taste.",
        duration: "3 minutes",
        benefits: "Helps with anxiety and panic attacks",
    },
    Exercise {
        name: "Body Scan Meditation",
        description: "Focus on each part of your body from toes to head, releasing tension.",
        duration: "10 minutes",
        benefits: "Reduces stress and improves body awareness",
    },
    Exercise {
        name: "Gratitude Practice",
        description: "Write down 3 things you're grateful for today.",
        duration: "5 minutes",
        benefits: "Improves mood and overall wellbeing",
    },
    Exercise {
        name: "Progressive Muscle Relaxation",
        description: "Tense and release each muscle group, starting from your feet.",
        duration: "15 minutes",
        benefits: "Relieves physical tension and stress",
    },
];

pub(crate) const MOOD_BOOSTING_ACTIVITIES: &[&str] = &[
    "Take a 10-minute walk outside 🚶",
    "Listen to your favorite uplifting music 🎵",
    "Call or text a friend you trust 📱",
    "Do 5 minutes of stretching or yoga 🧘",
    "Watch a funny video or comedy show 😄",
    "Practice a hobby you enjoy 🎨",
    "Take a warm shower or bath 🛁",
    "Write in your journal 📝",
    "Pet an animal or look at cute animal pictures 🐾",
    "Drink a cup of herbal tea ☕",
    "Do a random act of kindness 💝",
    "Organize a small space around you 🧹",
];

pub(crate) const PROFESSIONAL_HELP_SUGGESTION: &str = "Consider reaching out to a mental health professional for additional support. You don't have to go through this alone.";

pub(crate) const QUICK_BREATHING_TIP: &str = "Try this now: Take 3 deep breaths. Inhale slowly through your nose, hold for 3 seconds, exhale through your mouth.";

const ANXIOUS_TEMPLATES: &[&str] = &[
    "I hear that you're feeling anxious. That must be difficult. Let's work through this together.",
    "Anxiety can be overwhelming. Remember, you're not alone in this feeling.",
    "It's completely normal to feel anxious sometimes. Would you like to try a calming exercise?",
];

const SAD_TEMPLATES: &[&str] = &[
    "I'm sorry you're feeling this way. Your feelings are valid and important.",
    "It's okay to feel sad. Would you like to talk about what's bothering you?",
    "I'm here to listen. Sometimes expressing our feelings can help.",
];

const STRESSED_TEMPLATES: &[&str] = &[
    "Stress can be really challenging. Let's find ways to help you feel more at ease.",
    "It sounds like you have a lot on your plate. What's weighing on you most?",
    "I understand you're feeling stressed. Let's break things down together.",
];

const POSITIVE_TEMPLATES: &[&str] = &[
    "I'm so glad to hear you're feeling good! What's contributing to your positive mood?",
    "That's wonderful! It's great to celebrate these positive moments.",
    "Your positive energy is inspiring! Keep nurturing what makes you feel good.",
];

const NEUTRAL_TEMPLATES: &[&str] = &[
    "Thank you for sharing. How can I support you today?",
    "I'm here to listen and help. What would you like to talk about?",
    "How are you really feeling? I'm here to support you.",
];

/// Base reply templates for an emotion; every emotion without its own
/// bank uses the neutral bank.
pub(crate) fn response_templates(emotion: Emotion) -> &'static [&'static str] {
    match emotion {
        Emotion::Anxious => ANXIOUS_TEMPLATES,
        Emotion::Sad => SAD_TEMPLATES,
        Emotion::Stressed => STRESSED_TEMPLATES,
        Emotion::Positive => POSITIVE_TEMPLATES,
        _ => NEUTRAL_TEMPLATES,
    }
}

pub(crate) const MORNING_AFFIRMATIONS: &[&str] = &[
    "Today is a new beginning. You have the power to make it amazing! 🌅",
    "You are capable of handling whatever comes your way today. 💪",
    "Start your day with gratitude. You are worthy of good things. ✨",
    "Every morning brings new opportunities. Embrace them with confidence! 🌟",
    "You are stronger than you think. Today will be a great day! 🌈",
];

pub(crate) const EVENING_AFFIRMATIONS: &[&str] = &[
    "You did your best today, and that's what matters. Rest well. 🌙",
    "Be proud of yourself for making it through today. Tomorrow is a fresh start. ⭐",
    "Take time to reflect on the good moments of today. You deserve peace. 🌸",
    "Release the stress of the day. You are safe and cared for. 💙",
    "Every day is progress. Rest and recharge for tomorrow. 🌺",
];

pub(crate) const STRESS_AFFIRMATIONS: &[&str] = &[
    "Take a deep breath. You are doing better than you think. 🌬️",
    "It's okay to take a break. Your wellbeing matters most. 🧘",
    "You've overcome challenges before, and you will overcome this too. 💪",
    "Remember: progress, not perfection. You're doing great! 🌟",
    "One step at a time. You don't have to do everything at once. 🦋",
];

pub(crate) const ANXIETY_AFFIRMATIONS: &[&str] = &[
    "You are safe. This feeling will pass. Breathe slowly. 🌊",
    "Anxiety is temporary. You have the strength to get through this. 💙",
    "Ground yourself in the present moment. You are here, and you are okay. 🌿",
    "Your feelings are valid. Be gentle with yourself. 🌸",
    "You've survived 100% of your worst days. You can do this. 🌈",
];

pub(crate) const SADNESS_AFFIRMATIONS: &[&str] = &[
    "It's okay to feel sad. Your emotions are valid. 💙",
    "You are not alone. Reach out if you need support. 🤗",
    "This too shall pass. Better days are coming. 🌅",
    "Be kind to yourself. You deserve compassion and care. 🌺",
    "Your feelings matter. Take all the time you need. 🌸",
];

pub(crate) const GENERAL_AFFIRMATIONS: &[&str] = &[
    "You are valued and important. Never forget that. ✨",
    "Your mental health journey is unique and valid. 🌟",
    "Small steps forward are still progress. Keep going! 🦋",
    "You deserve happiness, peace, and love. 💖",
    "Believe in yourself. You are capable of amazing things! 🌈",
];

/// Dedicated affirmation bank for an emotion, when one exists.
pub(crate) fn emotion_affirmations(emotion: Emotion) -> Option<&'static [&'static str]> {
    match emotion {
        Emotion::Anxious => Some(ANXIETY_AFFIRMATIONS),
        Emotion::Sad => Some(SADNESS_AFFIRMATIONS),
        Emotion::Stressed => Some(STRESS_AFFIRMATIONS),
        _ => None,
    }
}
