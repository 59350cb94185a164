//! Resume rendering to JSON and HTML

use crate::error::Result;
use crate::model::{Education, RoleBlock, TailoredResume};
use askama::Template;
use std::path::Path;

/// Askama template for the rendered resume
#[derive(Template)]
#[template(source = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{{ name }} - Resume</title>
    <style>
        body {
            font-family: Georgia, 'Times New Roman', serif;
            line-height: 1.5;
            color: #222;
            max-width: 800px;
            margin: 0 auto;
            padding: 40px 24px;
        }
        header {
            text-align: center;
            border-bottom: 2px solid #222;
            padding-bottom: 12px;
            margin-bottom: 24px;
        }
        header h1 { margin: 0; font-size: 28px; letter-spacing: 1px; }
        header .location { color: #555; margin-top: 4px; }
        header .portfolio { margin-top: 4px; font-size: 14px; }
        section { margin-bottom: 22px; }
        section h2 {
            font-size: 16px;
            text-transform: uppercase;
            letter-spacing: 2px;
            border-bottom: 1px solid #999;
            padding-bottom: 4px;
        }
        .role { margin-bottom: 14px; }
        .role-header { display: flex; justify-content: space-between; }
        .role-header .title { font-weight: bold; }
        .role-header .dates { color: #555; }
        .company { font-style: italic; color: #444; }
        ul { margin: 6px 0 0 0; padding-left: 20px; }
        li { margin-bottom: 3px; }
        .skills { line-height: 1.8; }
    </style>
</head>
<body>
    <header>
        <h1>{{ name }}</h1>
        {% if has_location %}<div class="location">{{ location }}</div>{% endif %}
        {% if has_portfolio %}<div class="portfolio">{{ portfolio_line }}</div>{% endif %}
    </header>

    {% if has_summary %}
    <section>
        <h2>Professional Summary</h2>
        <p>{{ professional_summary }}</p>
    </section>
    {% endif %}

    <section>
        <h2>Experience</h2>
        {% for role in experience %}
        <div class="role">
            <div class="role-header">
                <span class="title">{{ role.title }}</span>
                <span class="dates">{{ role.dates }}</span>
            </div>
            <div class="company">{{ role.company }}</div>
            <ul>
                {% for bullet in role.bullets %}
                <li>{{ bullet }}</li>
                {% endfor %}
            </ul>
        </div>
        {% endfor %}
    </section>

    {% if has_skills %}
    <section>
        <h2>Skills</h2>
        <div class="skills">{{ skills_line }}</div>
    </section>
    {% endif %}

    {% if has_education %}
    <section>
        <h2>Education</h2>
        {% for entry in education %}
        <div class="role">
            <div class="role-header">
                <span class="title">{{ entry.credential }}</span>
                <span class="dates">{{ entry.dates }}</span>
            </div>
            <div class="company">{{ entry.institution }}</div>
        </div>
        {% endfor %}
    </section>
    {% endif %}

    {% if has_certifications %}
    <section>
        <h2>Certifications</h2>
        <ul>
            {% for cert in certifications %}
            <li>{{ cert }}</li>
            {% endfor %}
        </ul>
    </section>
    {% endif %}
</body>
</html>
"#, ext = "html")]
struct ResumeHtmlTemplate<'a> {
    name: &'a str,
    location: &'a str,
    has_location: bool,
    portfolio_line: String,
    has_portfolio: bool,
    professional_summary: &'a str,
    has_summary: bool,
    experience: &'a [RoleBlock],
    skills_line: String,
    has_skills: bool,
    education: &'a [Education],
    has_education: bool,
    certifications: &'a [String],
    has_certifications: bool,
}

pub struct ResumeRenderer;

impl ResumeRenderer {
    pub fn render_html(resume: &TailoredResume) -> Result<String> {
        let template = ResumeHtmlTemplate {
            name: &resume.name,
            location: &resume.location,
            has_location: !resume.location.is_empty(),
            portfolio_line: resume.portfolio.join(" · "),
            has_portfolio: !resume.portfolio.is_empty(),
            professional_summary: &resume.professional_summary,
            has_summary: !resume.professional_summary.is_empty(),
            experience: resume.experience.blocks(),
            skills_line: resume.skills.join(" · "),
            has_skills: !resume.skills.is_empty(),
            education: &resume.education,
            has_education: !resume.education.is_empty(),
            certifications: &resume.certifications,
            has_certifications: !resume.certifications.is_empty(),
        };
        Ok(template.render()?)
    }

    pub fn write_json(resume: &TailoredResume, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(resume)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn write_html(resume: &TailoredResume, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, Self::render_html(resume)?)?;
        Ok(())
    }
}
