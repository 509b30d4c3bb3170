//! Row formatting for content listings

use gateway_domain::{
    BlogPost, CaseStudy, Service, Solution, TaxonomyTerm, TeamMember, Testimonial, Tool,
};

/// A type that can be listed as one table row
pub trait TableRow {
    /// Column headers, in cell order
    fn headers() -> &'static [&'static str];

    /// Cell values, one per header
    fn cells(&self) -> Vec<String>;
}

fn list(items: &[String]) -> String {
    items.join(", ")
}

impl TableRow for Service {
    fn headers() -> &'static [&'static str] {
        &["ID", "SLUG", "TITLE", "CATEGORIES"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.slug.clone(),
            self.title.clone(),
            list(&self.categories),
        ]
    }
}

impl TableRow for CaseStudy {
    fn headers() -> &'static [&'static str] {
        &["ID", "SLUG", "TITLE", "CLIENT", "INDUSTRY", "YEAR"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.slug.clone(),
            self.title.clone(),
            self.client.clone(),
            self.industry.clone(),
            self.year.clone(),
        ]
    }
}

impl TableRow for Solution {
    fn headers() -> &'static [&'static str] {
        &["ID", "SLUG", "TITLE", "PRICING", "TIME SAVED"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.slug.clone(),
            self.title.clone(),
            self.pricing_range.as_str().to_string(),
            self.time_saved.clone(),
        ]
    }
}

impl TableRow for Tool {
    fn headers() -> &'static [&'static str] {
        &["ID", "SLUG", "TITLE", "TYPE", "PRICING", "STACK"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.slug.clone(),
            self.title.clone(),
            self.tool_type.clone(),
            self.pricing_model.as_str().to_string(),
            list(&self.technology_stack),
        ]
    }
}

impl TableRow for TeamMember {
    fn headers() -> &'static [&'static str] {
        &["ID", "NAME", "ROLE", "EXPERTISE"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.role.clone(),
            list(&self.expertise),
        ]
    }
}

impl TableRow for Testimonial {
    fn headers() -> &'static [&'static str] {
        &["ID", "NAME", "COMPANY", "RATING"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.company.clone(),
            "*".repeat(self.rating as usize),
        ]
    }
}

impl TableRow for BlogPost {
    fn headers() -> &'static [&'static str] {
        &["ID", "SLUG", "TITLE", "AUTHOR", "DATE", "READ"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.slug.clone(),
            self.title.clone(),
            self.author.clone(),
            self.date.clone(),
            format!("{} min", self.read_time),
        ]
    }
}

impl TableRow for TaxonomyTerm {
    fn headers() -> &'static [&'static str] {
        &["ID", "SLUG", "NAME", "COUNT"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.slug.clone(),
            self.name.clone(),
            self.count.to_string(),
        ]
    }
}
