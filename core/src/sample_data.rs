//! Hand-authored records served while the remote service is unreachable.
//!
//! The sequences are built once on first access and never mutated. File and
//! screenshot references carry the `/sample-` prefix, which the image helper
//! recognises and swaps for placeholder URLs.

use once_cell::sync::Lazy;

use crate::types::{Avatar, Motion, Workout};

fn strings(items: &[&str]) -> Option<Vec<String>> {
    Some(items.iter().map(|s| s.to_string()).collect())
}

fn text(s: &str) -> Option<String> {
    Some(s.to_string())
}

static WORKOUTS: Lazy<Vec<Workout>> = Lazy::new(|| {
    vec![
        Workout {
            id: text("workout-001"),
            name: text("Full Body HIIT"),
            description: text(
                "A high-intensity interval training workout targeting all major muscle groups. \
                 Perfect for building endurance and burning calories.",
            ),
            difficulty: text("Intermediate"),
            duration: Some(30),
            equipment: strings(&["Dumbbells", "Mat", "Timer"]),
            body_parts: strings(&["Full Body", "Core", "Legs", "Arms"]),
            muscle_groups: strings(&["Quadriceps", "Hamstrings", "Glutes", "Shoulders", "Chest", "Back"]),
            categories: strings(&["HIIT", "Strength", "Cardio"]),
            exercises: strings(&["Burpees", "Squats", "Push-ups", "Mountain Climbers", "Plank", "Jumping Jacks"]),
            file: text("/sample-workouts/full-body-hiit.glb"),
            screenshot: text("/sample-images/workout-hiit.jpg"),
            created_at: text("2024-01-15T10:30:00Z"),
            updated_at: text("2024-01-15T10:30:00Z"),
            created_by: text("Demo User"),
        },
        Workout {
            id: text("workout-002"),
            name: text("Yoga Flow for Beginners"),
            description: text(
                "A gentle yoga flow designed for beginners to improve flexibility, balance, and mindfulness.",
            ),
            difficulty: text("Beginner"),
            duration: Some(45),
            equipment: strings(&["Yoga Mat", "Yoga Block"]),
            body_parts: strings(&["Full Body", "Spine", "Hips", "Shoulders"]),
            muscle_groups: strings(&["Core", "Back", "Hip Flexors", "Shoulders"]),
            categories: strings(&["Yoga", "Flexibility", "Mindfulness"]),
            exercises: strings(&["Sun Salutation A", "Warrior I", "Warrior II", "Tree Pose", "Child's Pose", "Savasana"]),
            file: text("/sample-workouts/yoga-flow-beginner.glb"),
            screenshot: text("/sample-images/workout-yoga.jpg"),
            created_at: text("2024-01-10T14:20:00Z"),
            updated_at: text("2024-01-10T14:20:00Z"),
            created_by: text("Yoga Instructor"),
        },
        Workout {
            id: text("workout-003"),
            name: text("Upper Body Strength"),
            description: text("Focus on building upper body strength with this targeted workout routine."),
            difficulty: text("Advanced"),
            duration: Some(40),
            equipment: strings(&["Barbell", "Dumbbells", "Pull-up Bar"]),
            body_parts: strings(&["Chest", "Back", "Shoulders", "Arms"]),
            muscle_groups: strings(&["Pectorals", "Latissimus Dorsi", "Deltoids", "Biceps", "Triceps"]),
            categories: strings(&["Strength", "Bodybuilding"]),
            exercises: strings(&["Bench Press", "Pull-ups", "Shoulder Press", "Bicep Curls", "Tricep Dips"]),
            file: text("/sample-workouts/upper-body-strength.glb"),
            screenshot: text("/sample-images/workout-upper.jpg"),
            created_at: text("2024-01-12T09:15:00Z"),
            updated_at: text("2024-01-12T09:15:00Z"),
            created_by: text("Strength Coach"),
        },
    ]
});

static MOTIONS: Lazy<Vec<Motion>> = Lazy::new(|| {
    vec![
        Motion {
            id: text("motion-001"),
            name: text("Squat"),
            description: text(
                "A fundamental lower body exercise that targets quadriceps, hamstrings, and glutes. \
                 Proper form is essential for safety and effectiveness.",
            ),
            file: text("/sample-motions/squat.glb"),
            file_type: text("glb"),
            screenshot: text("/sample-images/motion-squat.jpg"),
            level: Some(1),
            equipment: strings(&["Bodyweight", "Barbell", "Dumbbells"]),
            body_parts: strings(&["Legs", "Glutes"]),
            muscle_groups: strings(&["Quadriceps", "Hamstrings", "Glutes", "Core"]),
            categories: strings(&["Strength", "Compound"]),
            primary_joints: strings(&["Knee", "Hip", "Ankle"]),
            labels: strings(&["Functional", "Compound", "Lower Body"]),
            file_size: Some(245_760),
            duration: Some(3.5),
            upload_date: text("2024-01-05T11:00:00Z"),
            author: text("Motion Expert"),
        },
        Motion {
            id: text("motion-002"),
            name: text("Push-up"),
            description: text(
                "Classic upper body exercise that builds chest, shoulder, and tricep strength \
                 while engaging the core.",
            ),
            file: text("/sample-motions/pushup.glb"),
            file_type: text("glb"),
            screenshot: text("/sample-images/motion-pushup.jpg"),
            level: Some(1),
            equipment: strings(&["Bodyweight"]),
            body_parts: strings(&["Chest", "Shoulders", "Arms"]),
            muscle_groups: strings(&["Pectorals", "Deltoids", "Triceps", "Core"]),
            categories: strings(&["Strength", "Calisthenics"]),
            primary_joints: strings(&["Shoulder", "Elbow", "Wrist"]),
            labels: strings(&["Bodyweight", "Upper Body", "Core"]),
            file_size: Some(196_608),
            duration: Some(2.8),
            upload_date: text("2024-01-06T14:30:00Z"),
            author: text("Fitness Trainer"),
        },
        Motion {
            id: text("motion-003"),
            name: text("Plank"),
            description: text(
                "Isometric core exercise that strengthens the entire midsection and improves stability.",
            ),
            file: text("/sample-motions/plank.glb"),
            file_type: text("glb"),
            screenshot: text("/sample-images/motion-plank.jpg"),
            level: Some(1),
            equipment: strings(&["Bodyweight"]),
            body_parts: strings(&["Core", "Shoulders"]),
            muscle_groups: strings(&["Rectus Abdominis", "Obliques", "Transverse Abdominis", "Shoulders"]),
            categories: strings(&["Core", "Isometric"]),
            primary_joints: strings(&["Shoulder", "Elbow", "Hip"]),
            labels: strings(&["Core", "Stability", "Isometric"]),
            file_size: Some(163_840),
            duration: Some(4.2),
            upload_date: text("2024-01-07T09:45:00Z"),
            author: text("Core Specialist"),
        },
        Motion {
            id: text("motion-004"),
            name: text("Deadlift"),
            description: text(
                "Compound exercise that works the entire posterior chain, including hamstrings, \
                 glutes, and lower back.",
            ),
            file: text("/sample-motions/deadlift.glb"),
            file_type: text("glb"),
            screenshot: text("/sample-images/motion-deadlift.jpg"),
            level: Some(3),
            equipment: strings(&["Barbell", "Dumbbells"]),
            body_parts: strings(&["Back", "Legs", "Glutes"]),
            muscle_groups: strings(&["Erector Spinae", "Hamstrings", "Glutes", "Traps", "Lats"]),
            categories: strings(&["Strength", "Compound", "Powerlifting"]),
            primary_joints: strings(&["Hip", "Knee", "Ankle"]),
            labels: strings(&["Compound", "Posterior Chain", "Heavy"]),
            file_size: Some(327_680),
            duration: Some(5.1),
            upload_date: text("2024-01-08T16:20:00Z"),
            author: text("Strength Coach"),
        },
    ]
});

static AVATARS: Lazy<Vec<Avatar>> = Lazy::new(|| {
    vec![
        Avatar {
            id: text("avatar-001"),
            name: text("Athletic Male"),
            description: text(
                "A fit male avatar with athletic build, suitable for high-intensity workouts \
                 and strength training demonstrations.",
            ),
            gender: text("Male"),
            categories: strings(&["Athletic", "Male", "Adult"]),
            file_name: text("athletic-male.glb"),
            file: text("/sample-avatars/athletic-male.glb"),
            screenshot: text("/sample-images/avatar-athletic-male.jpg"),
            created_at: text("2024-01-01T10:00:00Z"),
            updated_at: text("2024-01-01T10:00:00Z"),
            created_by: text("Avatar Designer"),
        },
        Avatar {
            id: text("avatar-002"),
            name: text("Yoga Female"),
            description: text(
                "A flexible female avatar designed for yoga and flexibility demonstrations \
                 with realistic body proportions.",
            ),
            gender: text("Female"),
            categories: strings(&["Yoga", "Female", "Adult", "Flexible"]),
            file_name: text("yoga-female.glb"),
            file: text("/sample-avatars/yoga-female.glb"),
            screenshot: text("/sample-images/avatar-yoga-female.jpg"),
            created_at: text("2024-01-02T11:30:00Z"),
            updated_at: text("2024-01-02T11:30:00Z"),
            created_by: text("Avatar Designer"),
        },
        Avatar {
            id: text("avatar-003"),
            name: text("Casual Male"),
            description: text(
                "A casual male avatar with average build, perfect for everyday workout demonstrations.",
            ),
            gender: text("Male"),
            categories: strings(&["Casual", "Male", "Adult"]),
            file_name: text("casual-male.glb"),
            file: text("/sample-avatars/casual-male.glb"),
            screenshot: text("/sample-images/avatar-casual-male.jpg"),
            created_at: text("2024-01-03T14:15:00Z"),
            updated_at: text("2024-01-03T14:15:00Z"),
            created_by: text("Avatar Designer"),
        },
        Avatar {
            id: text("avatar-004"),
            name: text("Senior Female"),
            description: text(
                "A senior female avatar designed for gentle exercise and senior fitness demonstrations.",
            ),
            gender: text("Female"),
            categories: strings(&["Senior", "Female", "Gentle Exercise"]),
            file_name: text("senior-female.glb"),
            file: text("/sample-avatars/senior-female.glb"),
            screenshot: text("/sample-images/avatar-senior-female.jpg"),
            created_at: text("2024-01-04T09:45:00Z"),
            updated_at: text("2024-01-04T09:45:00Z"),
            created_by: text("Avatar Designer"),
        },
    ]
});

pub fn workouts() -> &'static [Workout] {
    &WORKOUTS
}

pub fn motions() -> &'static [Motion] {
    &MOTIONS
}

pub fn avatars() -> &'static [Avatar] {
    &AVATARS
}
