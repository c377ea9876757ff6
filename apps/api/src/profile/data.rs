//! The hardcoded portfolio document served by the Profile Data Store.

use super::{Activity, Education, Experience, Profile, Project, Skill, SocialLink};

fn skill(key: &str, label: &str) -> Skill {
    Skill {
        key: key.to_string(),
        label: label.to_string(),
    }
}

/// Builds the static portfolio profile.
pub fn default_profile() -> Profile {
    Profile {
        introduction: "Hi, I'm Anish Kumar, a Computer Science student at KIET, Ghaziabad, \
            and a full stack developer. I've worked with startups to deliver customized \
            solutions and user-friendly designs. As part of E-Cell KIET, I've also gained \
            valuable skills in leadership and project management. Let's connect if you'd \
            like to collaborate or discuss opportunities!"
            .to_string(),
        educations: vec![Education {
            degree: "Bachelor of Technology in Computer Science".to_string(),
            institution: "KIET Group of Institutions, Ghaziabad".to_string(),
            year: "2023 - 2027".to_string(),
        }],
        skills: vec![
            skill("javascript", "JavaScript"),
            skill("react", "React"),
            skill("nodejs", "Node.js"),
            skill("express", "Express"),
            skill("mongodb", "MongoDB"),
            skill("html", "HTML"),
            skill("css", "CSS"),
            skill("tailwind", "Tailwind CSS"),
        ],
        projects: vec![
            Project {
                title: "Portfolio Website".to_string(),
                short_desc: "Personal portfolio with an AI chat assistant.".to_string(),
                description: "A personal portfolio website with an integrated AI assistant \
                    that answers questions about my skills, projects, and experience, and \
                    captures visitor contact details so I can follow up."
                    .to_string(),
                skills: vec![
                    skill("react", "React"),
                    skill("nodejs", "Node.js"),
                    skill("mongodb", "MongoDB"),
                ],
                link: Some("https://7anish.github.io/portfolio/".to_string()),
            },
            Project {
                title: "E-Cell Event Hub".to_string(),
                short_desc: "Event registration platform for E-Cell KIET.".to_string(),
                description: "A web platform for organizing and registering for E-Cell \
                    events, with live schedules, participant dashboards, and an admin \
                    panel for event coordinators."
                    .to_string(),
                skills: vec![
                    skill("react", "React"),
                    skill("express", "Express"),
                    skill("mongodb", "MongoDB"),
                    skill("tailwind", "Tailwind CSS"),
                ],
                link: None,
            },
            Project {
                title: "Shoply".to_string(),
                short_desc: "Full stack e-commerce storefront.".to_string(),
                description: "An e-commerce storefront with product search, a shopping \
                    cart, and order tracking, built end to end with a REST API backend."
                    .to_string(),
                skills: vec![
                    skill("javascript", "JavaScript"),
                    skill("nodejs", "Node.js"),
                    skill("express", "Express"),
                    skill("mongodb", "MongoDB"),
                ],
                link: None,
            },
        ],
        experiences: vec![Experience {
            role: "Full Stack Developer Intern".to_string(),
            company: "Xcentic Technologies".to_string(),
            duration: "June 2023 - Present".to_string(),
            description: "Developed and maintained web applications using React, Node.js, \
                and MongoDB. Collaborated with cross-functional teams to deliver \
                high-quality software solutions."
                .to_string(),
        }],
        extracurricular_activities: vec![
            Activity {
                title: "E-Cell KIET".to_string(),
                description: "Active member organizing tech events and workshops."
                    .to_string(),
            },
            Activity {
                title: "Hackathons".to_string(),
                description: "Participated in hackathons and coding competitions, winning \
                    several awards for innovative solutions."
                    .to_string(),
            },
        ],
        social_links: vec![
            SocialLink {
                platform: "GitHub".to_string(),
                url: "https://github.com/7anish".to_string(),
            },
            SocialLink {
                platform: "LinkedIn".to_string(),
                url: "https://linkedin.com/in/anish-kumar-2005".to_string(),
            },
            SocialLink {
                platform: "Instagram".to_string(),
                url: "https://instagram.com/anishkumar_2005".to_string(),
            },
        ],
    }
}
