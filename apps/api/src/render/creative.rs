//! Creative theme: oversized split-name hero over gradient accents.

use crate::models::portfolio::{PortfolioProfile, Project};
use crate::render::document::{chips, html_document, project_grid};
use crate::render::formatters::{link_target, split_name};
use crate::render::RenderContext;

const STYLESHEET: &str = r#"        :root {
            --background: 0 0% 98%; --foreground: 216 20% 15%;
            --accent-primary: 188 100% 42%; --accent-glow: 188 100% 60%; --accent-dark: 188 100% 30%;
            --card: 0 0% 100%; --card-foreground: 216 20% 15%; --card-border: 0 0% 92%;
            --text-primary: 216 20% 15%; --text-secondary: 216 10% 45%; --text-muted: 216 8% 60%;
            --gradient-primary: linear-gradient(135deg, hsl(188 100% 42%), hsl(188 100% 60%));
            --gradient-subtle: linear-gradient(135deg, hsl(0 0% 98%), hsl(0 0% 95%));
            --gradient-text: linear-gradient(135deg, hsl(188 100% 42%), hsl(188 80% 50%));
            --shadow-soft: 0 4px 20px -4px hsl(188 100% 42% / 0.15);
            --shadow-glow: 0 0 40px hsl(188 100% 60% / 0.3);
            --shadow-card: 0 8px 32px -8px hsl(216 20% 15% / 0.08);
            --transition-smooth: all 0.3s cubic-bezier(0.4, 0, 0.2, 1);
        }
        body { background-color: hsl(var(--background)); color: hsl(var(--foreground)); }
        .bg-card { background-color: hsl(var(--card)); }
        .bg-accent-primary { background-color: hsl(var(--accent-primary)); }
        .hover\:bg-accent-dark:hover { background-color: hsl(var(--accent-dark)); }
        .bg-accent-primary\/10 { background-color: hsl(var(--accent-primary) / 0.1); }
        .text-accent-primary { color: hsl(var(--accent-primary)); }
        .hover\:text-accent-dark:hover { color: hsl(var(--accent-dark)); }
        .text-text-primary { color: hsl(var(--text-primary)); }
        .text-text-secondary { color: hsl(var(--text-secondary)); }
        .text-text-muted { color: hsl(var(--text-muted)); }
        .border-card-border { border-color: hsl(var(--card-border)); }
        .shadow-card { box-shadow: var(--shadow-card); }
        .shadow-soft { box-shadow: var(--shadow-soft); }
        .hover\:shadow-glow:hover { box-shadow: var(--shadow-glow); }
        .transition-smooth { transition: var(--transition-smooth); }
        .gradient-text { background: var(--gradient-text); -webkit-background-clip: text; -webkit-text-fill-color: transparent; background-clip: text; color: transparent; }
        .bg-gradient-primary { background: var(--gradient-primary); }
        .bg-gradient-subtle { background: var(--gradient-subtle); }
"#;

const CHIP_CLASS: &str =
    "px-3 py-1 bg-accent-primary/10 text-accent-primary rounded-full text-sm font-medium";

pub fn render(profile: &PortfolioProfile, ctx: &RenderContext) -> String {
    let name = &profile.full_name;
    let (first_name, rest_of_name) = split_name(name);
    let projects = project_grid(&profile.projects, project_card);
    let skills = chips(&profile.skills, CHIP_CLASS);
    let year = ctx.copyright_year;

    let body = format!(
        r##"    <header class="fixed top-0 w-full bg-background/80 backdrop-blur-md z-50 border-b border-card-border">
        <nav class="container mx-auto px-6 py-4">
            <div class="flex justify-between items-center">
                <div class="text-2xl font-bold gradient-text">{name}</div>
                <div class="hidden md:flex space-x-8">
                    <a href="#home" class="text-text-secondary hover:text-accent-primary transition-smooth">Home</a>
                    <a href="#projects" class="text-text-secondary hover:text-accent-primary transition-smooth">Projects</a>
                    <a href="#contact" class="text-text-secondary hover:text-accent-primary transition-smooth">Contact</a>
                </div>
            </div>
        </nav>
    </header>

    <section id="home" class="pt-32 pb-12 px-6 min-h-screen flex items-center">
        <div class="container mx-auto">
            <div class="max-w-4xl">
                <h1 class="text-6xl md:text-8xl lg:text-9xl font-black leading-none mb-6">
                    <span class="block text-text-primary">{first_name}</span>
                    <span class="block gradient-text">{rest_of_name}</span>
                </h1>
                <div class="mb-8">
                    <p class="text-xl md:text-2xl text-text-secondary mb-4 max-w-2xl">{title}</p>
                    <p class="text-lg text-text-muted max-w-xl">{about}</p>
                </div>
                <div class="flex flex-wrap gap-2">
{skills}
                </div>
            </div>
        </div>
    </section>

    <section id="projects" class="py-20 px-6 bg-gradient-subtle">
        <div class="container mx-auto max-w-7xl">
            <div class="text-center mb-16">
                <h2 class="text-5xl md:text-6xl font-black mb-6">
                    <span class="text-text-primary">Featured</span>
                    <span class="gradient-text block">Projects</span>
                </h2>
            </div>
            <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
{projects}
            </div>
        </div>
    </section>

    <footer id="contact" class="bg-slate-900 text-white py-20 px-6">
        <div class="container mx-auto max-w-6xl text-center">
            <h3 class="text-4xl md:text-5xl font-black mb-6 gradient-text">
                Let's Create Something<span class="block">Amazing Together</span>
            </h3>
            <div class="flex justify-center gap-4 mt-8">
                <a href="mailto:{email}" class="text-slate-300 hover:text-accent-primary transition-smooth">{email}</a>
                <span class="text-slate-400">|</span>
                <a href="tel:{phone}" class="text-slate-300 hover:text-accent-primary transition-smooth">{phone}</a>
            </div>
            <div class="border-t border-slate-700 mt-16 pt-8 text-slate-400">
                <p>&copy; {year} {name}. All rights reserved.</p>
            </div>
        </div>
    </footer>
"##,
        title = profile.professional_title,
        about = profile.about_me,
        email = profile.email,
        phone = profile.phone,
    );

    html_document(name, STYLESHEET, "bg-background", &body)
}

fn project_card(project: &Project) -> String {
    format!(
        r#"                <article class="project-card group bg-card rounded-2xl overflow-hidden shadow-card hover:shadow-glow transition-smooth">
                    <div class="h-48 bg-gradient-primary relative overflow-hidden">
                        <div class="absolute inset-0 bg-black/20"></div>
                    </div>
                    <div class="p-6">
                        <h3 class="text-2xl font-bold text-accent-primary mb-3 group-hover:text-accent-dark transition-smooth">{name}</h3>
                        <p class="text-text-secondary mb-6 leading-relaxed">{description}</p>
                        <div class="flex flex-wrap gap-2 mb-6">
{technologies}
                        </div>
                        <div class="flex gap-4">
                            <a href="{href}" target="_blank" class="flex items-center text-accent-primary hover:text-accent-dark transition-smooth font-medium">
                                <svg class="w-4 h-4 mr-2" fill="none" stroke="currentColor" viewBox="0 0 24 24"><path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M10 6H6a2 2 0 00-2 2v10a2 2 0 002 2h10a2 2 0 002-2v-4M14 4h6m0 0v6m0-6L10 14" /></svg>
                                Live Demo
                            </a>
                        </div>
                    </div>
                </article>
"#,
        name = project.project_name,
        description = project.project_description,
        technologies = chips(&project.technologies, CHIP_CLASS),
        href = link_target(project.project_url.as_deref()),
    )
}
