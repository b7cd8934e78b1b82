//! Default Mentor Set
//! Mission: Fixed directory seeded into an empty store on first read

use crate::mentors::models::NewMentor;

fn mentor(
    name: &str,
    bio: &str,
    skills: &[&str],
    experience_years: u32,
    rating: f64,
) -> NewMentor {
    NewMentor {
        name: name.to_string(),
        bio: Some(bio.to_string()),
        skills: skills.iter().map(|s| s.to_string()).collect(),
        experience_years: Some(experience_years),
        rating,
    }
}

/// The fixed ten-mentor default set.
pub fn default_mentors() -> Vec<NewMentor> {
    vec![
        mentor(
            "Aarav Mehta",
            "Full-stack engineer focused on modern web development and scalable frontend architectures.",
            &["Web Development", "HTML", "CSS", "JavaScript", "React", "Node.js"],
            5,
            4.7,
        ),
        mentor(
            "Ishaan Verma",
            "Competitive programmer and problem-solving mentor specialising in data structures and algorithms.",
            &["DSA", "Algorithms", "Data Structures", "Problem Solving", "C++"],
            4,
            4.8,
        ),
        mentor(
            "Kavya Iyer",
            "Backend engineer designing high-traffic systems and robust APIs.",
            &["Backend", "Node.js", "Express", "Microservices", "REST APIs"],
            6,
            4.9,
        ),
        mentor(
            "Rohan Deshpande",
            "System design mentor with experience building distributed systems at scale.",
            &["System Design", "Distributed Systems", "Scalability", "High Availability"],
            5,
            4.85,
        ),
        mentor(
            "Sneha Nair",
            "Frontend specialist helping engineers craft pixel-perfect and accessible UIs.",
            &["Frontend", "React", "TypeScript", "CSS", "Tailwind", "UI/UX"],
            3,
            4.6,
        ),
        mentor(
            "Aditya Sharma",
            "Database engineer with a focus on schema design, indexing, and query optimisation.",
            &["DBMS", "SQL", "MongoDB", "PostgreSQL", "Database Design"],
            4,
            4.75,
        ),
        mentor(
            "Priya Joshi",
            "AI/ML engineer working on applied machine learning and MLOps.",
            &["AI/ML", "Python", "TensorFlow", "PyTorch", "ML Ops"],
            5,
            4.9,
        ),
        mentor(
            "Varun Singh",
            "Software engineer mentoring on object-oriented design and clean architecture.",
            &["OOP", "Design Patterns", "Java", "Clean Code"],
            3,
            4.5,
        ),
        mentor(
            "Neha Gupta",
            "Engineer with a strong foundation in core mathematics for computer science.",
            &["Mathematics", "Discrete Maths", "Probability", "Linear Algebra"],
            4,
            4.65,
        ),
        mentor(
            "Siddharth Rao",
            "Mentor focused on backend systems, APIs, and career guidance for software engineers.",
            &["Backend", "System Design", "Career Guidance", "APIs"],
            6,
            4.95,
        ),
    ]
}
