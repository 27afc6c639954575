//! View data for each page body.
//!
//! Everything a template needs is computed here: labels, joined tag lists, truncated
//! excerpts, open/closed markers. Templates only lay it out.

use super::templates;
use minijinja::{context, Value};
use serde::Serialize;
use thedigest::api::DigestApi;
use thedigest::commands::search::result_summary;
use thedigest::content::{
    Section, Testimonial, ABOUT_STORY, ABOUT_VALUES, ACCOUNT_BENEFITS, ARCHIVE_STATS, CONTACT_EMAIL,
    CONTENT_FOCUS, FAQS, HOME_FEATURES, HOME_STATS, LEGAL_UPDATED, PRIVACY, RESPONSE_TIME,
    SAMPLE_CONTENT, SUBSCRIBE_BENEFITS, SUBSCRIBE_QUOTE, TEAM, TERMS, TESTIMONIALS,
    WEEKLY_FORMAT,
};
use thedigest::error::Result;
use thedigest::forms::faq::FaqAccordion;
use thedigest::forms::subscribe::INTERESTS;
use thedigest::model::IssueRecord;
use thedigest::routes::Route;
use tracing::debug;

/// Width of the page rule and of truncated archive excerpts.
pub const LINE_WIDTH: usize = 78;

/// A page body ready to be wrapped in the shell.
pub struct Page {
    pub route: Route,
    pub body: &'static str,
    pub data: Value,
}

#[derive(Debug, Serialize)]
pub struct IssueView {
    pub id: u32,
    pub href: String,
    pub badge: String,
    pub title: String,
    pub date: String,
    pub read_time: String,
    pub excerpt: String,
    pub tags: String,
    pub featured: bool,
}

impl IssueView {
    /// Archive listing entry; the excerpt is cut to one line.
    pub fn card(issue: &IssueRecord) -> Self {
        let mut view = Self::full(issue);
        view.excerpt = truncate_to_width(&issue.excerpt, LINE_WIDTH);
        view
    }

    pub fn full(issue: &IssueRecord) -> Self {
        Self {
            id: issue.id,
            href: issue.href(),
            badge: format!("Issue #{}", issue.id),
            title: issue.title.clone(),
            date: issue.publish_date_label(),
            read_time: issue.read_time_label(),
            excerpt: issue.excerpt.clone(),
            tags: issue.tags.join(" · "),
            featured: issue.featured,
        }
    }
}

#[derive(Debug, Serialize)]
struct TestimonialView {
    stars: String,
    content: &'static str,
    name: &'static str,
    role: &'static str,
}

impl From<&Testimonial> for TestimonialView {
    fn from(t: &Testimonial) -> Self {
        Self {
            stars: "★".repeat(t.rating as usize),
            content: t.content,
            name: t.name,
            role: t.role,
        }
    }
}

#[derive(Debug, Serialize)]
struct FaqItem {
    number: usize,
    question: &'static str,
    answer: &'static str,
    open: bool,
    marker: &'static str,
}

pub fn for_route(api: &DigestApi, route: Route) -> Result<Page> {
    match route {
        Route::Home => Ok(home()),
        Route::About => Ok(about(api)),
        Route::Archive => archive(api, "", 1),
        Route::Issue(id) => issue(api, id),
        Route::Contact => Ok(contact()),
        Route::Faq => Ok(faq(&FaqAccordion::default())),
        Route::Subscribe => Ok(subscribe()),
        Route::SignIn => Ok(sign_in()),
        Route::Privacy => Ok(legal(Route::Privacy, PRIVACY)),
        Route::Terms => Ok(legal(Route::Terms, TERMS)),
    }
}

pub fn home() -> Page {
    let testimonials: Vec<TestimonialView> = TESTIMONIALS.iter().map(Into::into).collect();
    Page {
        route: Route::Home,
        body: templates::HOME.0,
        data: context! {
            stats => HOME_STATS,
            features => HOME_FEATURES,
            testimonials,
        },
    }
}

fn about(api: &DigestApi) -> Page {
    Page {
        route: Route::About,
        body: templates::ABOUT.0,
        data: context! {
            story => ABOUT_STORY,
            total_issues => advertised_total(api),
            values => ABOUT_VALUES,
            weekly_format => WEEKLY_FORMAT,
            content_focus => CONTENT_FOCUS,
            team => TEAM,
        },
    }
}

/// The archive listing. A non-empty query searches the whole catalog and ignores `page`.
pub fn archive(api: &DigestApi, query: &str, page: usize) -> Result<Page> {
    let (result, query_summary, footer, next_page) = if query.is_empty() {
        let result = api.archive_page(page)?;
        let footer = result.page.as_ref().map(|p| p.summary());
        let next_page = result
            .page
            .as_ref()
            .filter(|p| p.has_more)
            .map(|p| p.number + 1);
        (result, None, footer, next_page)
    } else {
        if page > 1 {
            debug!(page, "search results are not paginated; ignoring page");
        }
        let result = api.search_archive(query)?;
        let summary = result_summary(result.listed_issues.len(), query);
        (result, summary, None, None)
    };

    let issues: Vec<IssueView> = result.listed_issues.iter().map(IssueView::card).collect();
    let notices: Vec<String> = result.messages.iter().map(|m| m.content.clone()).collect();
    let show_clear = !query.is_empty() && issues.is_empty();

    Ok(Page {
        route: Route::Archive,
        body: templates::ARCHIVE.0,
        data: context! {
            total_issues => advertised_total(api),
            stats => ARCHIVE_STATS,
            query_summary,
            issues,
            notices,
            show_clear,
            footer,
            next_page,
        },
    })
}

pub fn issue(api: &DigestApi, id: u32) -> Result<Page> {
    let result = api.view_issue(id)?;
    let issue = result.issue.as_ref().map(IssueView::full);
    Ok(Page {
        route: Route::Issue(id),
        body: templates::ISSUE.0,
        data: context! { issue },
    })
}

fn contact() -> Page {
    Page {
        route: Route::Contact,
        body: templates::CONTACT.0,
        data: context! {
            email => CONTACT_EMAIL,
            response_time => RESPONSE_TIME,
        },
    }
}

pub fn faq(accordion: &FaqAccordion) -> Page {
    let items: Vec<FaqItem> = FAQS
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let open = accordion.is_open(i);
            FaqItem {
                number: i + 1,
                question: entry.question,
                answer: entry.answer,
                open,
                marker: if open { "▾" } else { "▸" },
            }
        })
        .collect();

    Page {
        route: Route::Faq,
        body: templates::FAQ.0,
        data: context! { items },
    }
}

fn subscribe() -> Page {
    Page {
        route: Route::Subscribe,
        body: templates::SUBSCRIBE.0,
        data: context! {
            interests => INTERESTS,
            benefits => SUBSCRIBE_BENEFITS,
            samples => SAMPLE_CONTENT,
            quote => TestimonialView::from(&SUBSCRIBE_QUOTE),
        },
    }
}

fn sign_in() -> Page {
    Page {
        route: Route::SignIn,
        body: templates::SIGN_IN.0,
        data: context! { benefits => ACCOUNT_BENEFITS },
    }
}

fn legal(route: Route, sections: &'static [Section]) -> Page {
    Page {
        route,
        body: templates::LEGAL.0,
        data: context! {
            title => route.title(),
            updated => LEGAL_UPDATED,
            sections,
        },
    }
}

fn advertised_total(api: &DigestApi) -> usize {
    api.settings()
        .catalog_total_issues
        .max(api.catalog().len())
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    let limit = max_width.saturating_sub(1);

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}
