//! Static vocabulary bundles used to synthesize candidates for a role family.

use serde::{Deserialize, Serialize};

/// Abstract role family a job maps to. Unknown keys fall back to [`RoleFamily::FullStack`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RoleFamily {
    #[default]
    FullStack,
    Backend,
    Product,
    DataAnalyst,
    DevOps,
}

impl RoleFamily {
    pub const ALL: [RoleFamily; 5] = [
        RoleFamily::FullStack,
        RoleFamily::Backend,
        RoleFamily::Product,
        RoleFamily::DataAnalyst,
        RoleFamily::DevOps,
    ];

    pub fn from_key(key: &str) -> Self {
        match key.trim().to_ascii_lowercase().as_str() {
            "fullstack" | "full-stack" | "full_stack" => Self::FullStack,
            "backend" | "back-end" => Self::Backend,
            "product" | "product-manager" | "pm" => Self::Product,
            "data-analyst" | "data_analyst" | "analyst" | "data" => Self::DataAnalyst,
            "devops" | "dev-ops" | "sre" | "platform" => Self::DevOps,
            _ => Self::default(),
        }
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::FullStack => "fullstack",
            Self::Backend => "backend",
            Self::Product => "product",
            Self::DataAnalyst => "data-analyst",
            Self::DevOps => "devops",
        }
    }
}

impl From<String> for RoleFamily {
    fn from(value: String) -> Self {
        Self::from_key(&value)
    }
}

impl From<RoleFamily> for String {
    fn from(value: RoleFamily) -> Self {
        value.key().to_string()
    }
}

/// Read-only bundle of titles, skills, stacks, and narrative builders for one family.
pub struct RoleProfile {
    pub family: RoleFamily,
    pub current_titles: &'static [&'static str],
    pub prior_titles: &'static [&'static str],
    pub skill_pool: &'static [&'static str],
    pub tech_stacks: &'static [&'static str],
    /// Summary for the current position from `(company, tech_stack)`.
    pub current_role_summary: fn(&str, &str) -> String,
    /// Summary for the prior position from `company`.
    pub prior_role_summary: fn(&str) -> String,
}

impl std::fmt::Debug for RoleProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RoleProfile")
            .field("family", &self.family)
            .field("current_titles", &self.current_titles)
            .field("prior_titles", &self.prior_titles)
            .field("skill_pool", &self.skill_pool)
            .field("tech_stacks", &self.tech_stacks)
            .finish_non_exhaustive()
    }
}

pub fn profile_for(family: RoleFamily) -> &'static RoleProfile {
    match family {
        RoleFamily::FullStack => &FULL_STACK,
        RoleFamily::Backend => &BACKEND,
        RoleFamily::Product => &PRODUCT,
        RoleFamily::DataAnalyst => &DATA_ANALYST,
        RoleFamily::DevOps => &DEVOPS,
    }
}

static FULL_STACK: RoleProfile = RoleProfile {
    family: RoleFamily::FullStack,
    current_titles: &[
        "Senior Full-Stack Engineer",
        "Full-Stack Developer",
        "Software Engineer II",
        "Senior Software Engineer",
        "Web Platform Engineer",
    ],
    prior_titles: &[
        "Frontend Developer",
        "Software Engineer",
        "Junior Web Developer",
        "Backend Developer",
    ],
    skill_pool: &[
        "React", "Node.js", "TypeScript", "PostgreSQL", "GraphQL", "Next.js", "Redis", "Docker",
        "Jest", "Tailwind CSS", "REST APIs", "AWS",
    ],
    tech_stacks: &[
        "React and Node.js",
        "Next.js with a GraphQL gateway",
        "TypeScript microservices on AWS",
        "Vue and Express",
        "a Rails monolith with a React front end",
    ],
    current_role_summary: full_stack_current,
    prior_role_summary: full_stack_prior,
};

fn full_stack_current(company: &str, stack: &str) -> String {
    format!(
        "Owns end-to-end features at {company} on {stack}, from schema changes through UI release."
    )
}

fn full_stack_prior(company: &str) -> String {
    format!("Built customer-facing web features and internal tooling at {company}.")
}

static BACKEND: RoleProfile = RoleProfile {
    family: RoleFamily::Backend,
    current_titles: &[
        "Senior Backend Engineer",
        "Backend Engineer",
        "Platform Engineer",
        "Software Engineer, Services",
    ],
    prior_titles: &["Software Engineer", "Java Developer", "API Developer", "Systems Engineer"],
    skill_pool: &[
        "Go", "Java", "Python", "PostgreSQL", "Kafka", "gRPC", "Kubernetes", "Redis", "Docker",
        "Microservices", "AWS", "Distributed Systems",
    ],
    tech_stacks: &[
        "Go services on Kubernetes",
        "Java and Spring Boot",
        "Python with FastAPI",
        "event-driven services on Kafka",
    ],
    current_role_summary: backend_current,
    prior_role_summary: backend_prior,
};

fn backend_current(company: &str, stack: &str) -> String {
    format!("Designs and operates high-throughput APIs at {company} using {stack}.")
}

fn backend_prior(company: &str) -> String {
    format!("Maintained core services and data pipelines at {company}.")
}

static PRODUCT: RoleProfile = RoleProfile {
    family: RoleFamily::Product,
    current_titles: &[
        "Senior Product Manager",
        "Product Manager",
        "Group Product Manager",
        "Product Owner",
    ],
    prior_titles: &[
        "Associate Product Manager",
        "Business Analyst",
        "Program Manager",
        "Product Analyst",
    ],
    skill_pool: &[
        "Roadmapping", "Stakeholder Management", "Agile", "Analytics", "User Research", "SQL",
        "A/B Testing", "Jira", "Go-to-Market", "Prioritization",
    ],
    tech_stacks: &[
        "a B2B SaaS platform",
        "a mobile consumer app",
        "a payments product line",
        "an internal developer platform",
    ],
    current_role_summary: product_current,
    prior_role_summary: product_prior,
};

fn product_current(company: &str, stack: &str) -> String {
    format!("Leads discovery and delivery for {stack} at {company}, owning the quarterly roadmap.")
}

fn product_prior(company: &str) -> String {
    format!("Partnered with engineering and design on feature launches at {company}.")
}

static DATA_ANALYST: RoleProfile = RoleProfile {
    family: RoleFamily::DataAnalyst,
    current_titles: &[
        "Senior Data Analyst",
        "Data Analyst",
        "Analytics Engineer",
        "Business Intelligence Analyst",
    ],
    prior_titles: &[
        "Junior Data Analyst",
        "Reporting Analyst",
        "Operations Analyst",
        "Research Assistant",
    ],
    skill_pool: &[
        "SQL", "Python", "Tableau", "Statistics", "Excel", "Power BI", "dbt", "Looker", "R",
        "Data Modeling", "A/B Testing",
    ],
    tech_stacks: &[
        "Snowflake and dbt",
        "BigQuery with Looker",
        "Redshift and Tableau",
        "a Python and pandas notebook workflow",
    ],
    current_role_summary: data_analyst_current,
    prior_role_summary: data_analyst_prior,
};

fn data_analyst_current(company: &str, stack: &str) -> String {
    format!("Builds decision dashboards and metric definitions at {company} on {stack}.")
}

fn data_analyst_prior(company: &str) -> String {
    format!("Produced weekly business reporting and ad-hoc analyses at {company}.")
}

static DEVOPS: RoleProfile = RoleProfile {
    family: RoleFamily::DevOps,
    current_titles: &[
        "Senior DevOps Engineer",
        "Site Reliability Engineer",
        "DevOps Engineer",
        "Infrastructure Engineer",
    ],
    prior_titles: &[
        "Systems Administrator",
        "Build and Release Engineer",
        "Cloud Support Engineer",
        "Linux Engineer",
    ],
    skill_pool: &[
        "AWS", "Terraform", "Kubernetes", "CI/CD", "Docker", "Prometheus", "Linux", "Ansible",
        "Helm", "Python", "Bash", "GCP",
    ],
    tech_stacks: &[
        "Terraform-managed AWS",
        "GKE with Helm and Argo CD",
        "GitHub Actions pipelines",
        "a hybrid on-prem and Azure estate",
    ],
    current_role_summary: devops_current,
    prior_role_summary: devops_prior,
};

fn devops_current(company: &str, stack: &str) -> String {
    format!("Runs deployment pipelines and on-call reliability at {company} across {stack}.")
}

fn devops_prior(company: &str) -> String {
    format!("Automated server provisioning and release tooling at {company}.")
}
