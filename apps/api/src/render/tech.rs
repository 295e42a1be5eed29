//! Tech theme: dark palette with glow cards and an initials brand mark. Adds a
//! static GitHub link on every project card.

use crate::models::portfolio::{PortfolioProfile, Project};
use crate::render::document::{chips, html_document, project_grid};
use crate::render::formatters::{initials, link_target, PLACEHOLDER_HREF};
use crate::render::RenderContext;

const STYLESHEET: &str = r#"        :root {
            --background: 225 15% 6%; --foreground: 210 40% 96%;
            --card: 225 15% 8%; --card-foreground: 210 40% 96%;
            --popover: 225 15% 8%; --popover-foreground: 210 40% 96%;
            --primary: 195 100% 50%; --primary-foreground: 225 15% 6%;
            --secondary: 270 95% 75%; --secondary-foreground: 225 15% 6%;
            --muted: 225 15% 12%; --muted-foreground: 210 40% 70%;
            --accent: 195 100% 50%; --accent-foreground: 225 15% 6%;
            --destructive: 0 84.2% 60.2%; --destructive-foreground: 210 40% 98%;
            --border: 225 15% 15%; --input: 225 15% 12%; --ring: 195 100% 50%;
            --radius: 0.75rem;
            --gradient-primary: 195 100% 50%; --gradient-secondary: 270 95% 75%;
            --glow-primary: 195 100% 50%; --glow-secondary: 270 95% 75%;
            --shadow-glow: 0 0 20px hsl(var(--glow-primary) / 0.3);
            --shadow-card: 0 4px 20px hsl(225 15% 2% / 0.5);
        }
        body { background-color: hsl(var(--background)); color: hsl(var(--foreground)); }
        .bg-card { background-color: hsl(var(--card)); }
        .text-primary { color: hsl(var(--primary)); }
        .bg-primary { background-color: hsl(var(--primary)); }
        .text-primary-foreground { color: hsl(var(--primary-foreground)); }
        .bg-primary\/10 { background-color: hsl(var(--primary) / 0.1); }
        .bg-primary\/20 { background-color: hsl(var(--primary) / 0.2); }
        .hover\:bg-primary\/90:hover { background-color: hsl(var(--primary) / 0.9); }
        .text-muted-foreground { color: hsl(var(--muted-foreground)); }
        .bg-muted { background-color: hsl(var(--muted)); }
        .hover\:bg-muted:hover { background-color: hsl(var(--muted)); }
        .border-border { border-color: hsl(var(--border)); }
        .border-primary\/50 { border-color: hsl(var(--primary) / 0.5); }
        .hover\:border-primary:hover { border-color: hsl(var(--primary)); }
        .gradient-text { background-image: linear-gradient(to right, hsl(var(--gradient-primary)), hsl(var(--gradient-secondary))); background-clip: text; -webkit-background-clip: text; color: transparent; }
        .glow-card { box-shadow: var(--shadow-card); transition: all 0.3s ease; }
        .glow-card:hover { box-shadow: var(--shadow-glow), var(--shadow-card); transform: translateY(-2px); }
        .nav-blur { backdrop-filter: blur(10px); -webkit-backdrop-filter: blur(10px); }
"#;

const CHIP_CLASS: &str = "bg-muted text-muted-foreground text-xs font-medium px-2.5 py-1 rounded-full";
const SKILL_CHIP_CLASS: &str =
    "border border-primary/50 text-primary text-sm font-medium px-3 py-1 rounded-full";

pub fn render(profile: &PortfolioProfile, ctx: &RenderContext) -> String {
    let name = &profile.full_name;
    let brand = initials(name);
    let projects = project_grid(&profile.projects, project_card);
    let skills = chips(&profile.skills, SKILL_CHIP_CLASS);
    let year = ctx.copyright_year;

    let body = format!(
        r##"    <header class="fixed top-0 left-0 right-0 z-50 nav-blur bg-background/80 border-b border-border">
        <nav class="container mx-auto px-6 py-4">
            <div class="flex items-center justify-between">
                <div class="text-xl font-bold gradient-text">{brand}</div>
                <div class="hidden md:flex items-center space-x-8">
                    <a href="#hero" class="text-muted-foreground hover:text-primary transition-colors duration-200">Home</a>
                    <a href="#projects" class="text-muted-foreground hover:text-primary transition-colors duration-200">Projects</a>
                    <a href="#contact" class="text-muted-foreground hover:text-primary transition-colors duration-200">Contact</a>
                </div>
                <a href="#contact" class="hidden sm:inline-block px-4 py-2 text-sm border-primary/50 hover:bg-primary/10 hover:border-primary text-primary border rounded-md">Get In Touch</a>
            </div>
        </nav>
    </header>

    <main>
        <section id="hero" class="min-h-screen flex items-center justify-center px-6 pt-20">
            <div class="container mx-auto text-center max-w-4xl">
                <div class="space-y-8">
                    <h1 class="text-5xl md:text-7xl font-bold leading-tight">Hi, I'm <span class="gradient-text">{name}</span></h1>
                    <h2 class="text-2xl md:text-3xl text-muted-foreground font-light">{title}</h2>
                    <p class="text-lg md:text-xl text-muted-foreground max-w-2xl mx-auto leading-relaxed">{about}</p>
                    <div class="flex flex-wrap justify-center gap-3">
{skills}
                    </div>
                </div>
            </div>
        </section>

        <section id="projects" class="py-20 px-6">
            <div class="container mx-auto max-w-6xl">
                <div class="text-center mb-16">
                    <h2 class="text-4xl md:text-5xl font-bold mb-6">Featured <span class="gradient-text">Projects</span></h2>
                    <p class="text-xl text-muted-foreground max-w-2xl mx-auto">Explore my recent work showcasing innovative solutions and cutting-edge technologies</p>
                </div>
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
{projects}
                </div>
            </div>
        </section>
    </main>

    <footer id="contact" class="bg-card border-t border-border py-16 px-6">
        <div class="container mx-auto max-w-4xl">
            <div class="text-center mb-12">
                <h2 class="text-3xl md:text-4xl font-bold mb-4">Let's Build Something <span class="gradient-text">Amazing</span></h2>
            </div>
            <div class="grid grid-cols-1 md:grid-cols-2 gap-8 mb-12">
                <div class="space-y-4">
                    <div class="flex items-center space-x-3 text-muted-foreground"><span class="text-primary">&#128231;</span><a href="mailto:{email}" class="hover:text-primary">{email}</a></div>
                    <div class="flex items-center space-x-3 text-muted-foreground"><span class="text-primary">&#128222;</span><a href="tel:{phone}" class="hover:text-primary">{phone}</a></div>
                </div>
                <div class="flex items-center justify-center md:justify-end space-x-4">
                    <a href="{placeholder}" class="text-muted-foreground hover:text-primary">GitHub</a>
                    <a href="{placeholder}" class="text-muted-foreground hover:text-primary">LinkedIn</a>
                </div>
            </div>
            <div class="border-t border-border pt-8 text-center">
                <p class="text-muted-foreground">&copy; {year} {name}. Built with Tailwind CSS.</p>
            </div>
        </div>
    </footer>
"##,
        title = profile.professional_title,
        about = profile.about_me,
        email = profile.email,
        phone = profile.phone,
        placeholder = PLACEHOLDER_HREF,
    );

    html_document(name, STYLESHEET, "min-h-screen bg-background text-foreground", &body)
}

fn project_card(project: &Project) -> String {
    format!(
        r#"                    <article class="project-card glow-card bg-card border-border hover:border-primary/50 transition-all duration-300 rounded-lg overflow-hidden">
                        <div class="p-6">
                            <h3 class="text-xl font-semibold text-card-foreground mb-2">{name}</h3>
                            <p class="text-muted-foreground leading-relaxed mb-4">{description}</p>
                            <div class="flex flex-wrap gap-2 mb-6">
{technologies}
                            </div>
                            <div class="flex gap-3">
                                <a href="{href}" target="_blank" rel="noopener noreferrer" class="flex-1 inline-flex items-center justify-center px-4 py-2 text-sm font-medium text-primary bg-primary/10 hover:bg-primary/20 rounded-md transition-colors">Live Demo</a>
                                <a href="{placeholder}" target="_blank" rel="noopener noreferrer" class="inline-flex items-center justify-center px-4 py-2 text-sm font-medium text-muted-foreground hover:bg-muted rounded-md transition-colors">GitHub</a>
                            </div>
                        </div>
                    </article>
"#,
        name = project.project_name,
        description = project.project_description,
        technologies = chips(&project.technologies, CHIP_CLASS),
        href = link_target(project.project_url.as_deref()),
        placeholder = PLACEHOLDER_HREF,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::test_fixtures::*;

    const CTX: RenderContext = RenderContext { copyright_year: 2026 };

    #[test]
    fn test_jane_doe_scenario() {
        let html = render(&jane_doe(), &CTX);
        assert!(html.contains("Jane Doe"));
        assert!(html.contains("Engineer"));
        assert!(html.contains("Proxy"));
        assert!(html.contains(&format!("<span class=\"{CHIP_CLASS}\">Go</span>")));
        assert!(html.contains("<a href=\"#\" target=\"_blank\" rel=\"noopener noreferrer\" class=\"flex-1"));
    }

    #[test]
    fn test_brand_mark_uses_initials() {
        let html = render(&jane_doe(), &CTX);
        assert!(html.contains("<div class=\"text-xl font-bold gradient-text\">JD</div>"));
    }

    #[test]
    fn test_every_card_has_demo_and_static_github_link() {
        let profile = with_projects(vec![
            project("Alpha", Some("https://a.dev"), "Rust"),
            project("Bravo", Some("https://b.dev"), "Go"),
        ]);
        let html = render(&profile, &CTX);
        assert_eq!(html.matches(">Live Demo</a>").count(), 2);
        assert_eq!(
            html.matches("<a href=\"#\" target=\"_blank\" rel=\"noopener noreferrer\" class=\"inline-flex")
                .count(),
            2
        );
        assert!(html.contains("href=\"https://a.dev\""));
        assert!(html.contains("href=\"https://b.dev\""));
    }

    #[test]
    fn test_nav_anchors_target_hero() {
        let html = render(&jane_doe(), &CTX);
        assert!(html.contains("href=\"#hero\""));
        assert!(html.contains("id=\"hero\""));
        assert!(html.contains("id=\"contact\""));
    }
}
