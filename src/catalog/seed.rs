//! Seed datasets: the platform's stock catalog content
//!
//! The shipped client renders these collections from literal arrays; here
//! they are built once and served through [`SeedSource`] like any other
//! data-layer supplier. Review rows reference the seeded courses by id,
//! so everything is constructed together.

use crate::catalog::audit::{AuditEntry, AuditStatus, Severity};
use crate::catalog::blog::BlogPost;
use crate::catalog::course::{Course, CourseCategory, CourseLevel};
use crate::catalog::forum::{ForumPost, PostAuthor};
use crate::catalog::review::Review;
use crate::session::Role;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// The full seed dataset, internally consistent across collections
#[derive(Debug, Clone)]
pub struct SeedData {
    pub courses: Vec<Course>,
    pub forum_posts: Vec<ForumPost>,
    pub blog_posts: Vec<BlogPost>,
    pub audit_entries: Vec<AuditEntry>,
    pub reviews: Vec<Review>,
}

impl SeedData {
    pub fn build() -> Self {
        let courses = courses();
        let reviews = reviews(&courses);
        Self {
            forum_posts: forum_posts(),
            blog_posts: blog_posts(),
            audit_entries: audit_entries(),
            courses,
            reviews,
        }
    }
}

fn ts(value: &str) -> DateTime<Utc> {
    value.parse().expect("seed timestamps are well-formed")
}

fn tags(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

fn pexels(photo: u32) -> Option<String> {
    Some(format!(
        "https://images.pexels.com/photos/{photo}/pexels-photo-{photo}.jpeg?auto=compress&cs=tinysrgb&w=600"
    ))
}

#[allow(clippy::too_many_arguments)]
fn course(
    title: &str,
    instructor: &str,
    description: &str,
    category: CourseCategory,
    level: CourseLevel,
    price: f64,
    original_price: f64,
    rating: f64,
    students: u32,
    duration_hours: u32,
    tag_list: &[&str],
    bestseller: bool,
    photo: u32,
    updated: &str,
) -> Course {
    Course {
        id: Uuid::new_v4(),
        title: title.to_string(),
        instructor: instructor.to_string(),
        description: description.to_string(),
        category,
        level,
        price,
        original_price,
        rating,
        students,
        duration_hours,
        tags: tags(tag_list),
        bestseller,
        thumbnail_url: pexels(photo),
        updated: ts(&format!("{updated}T00:00:00Z")),
    }
}

fn courses() -> Vec<Course> {
    vec![
        course(
            "Complete Web Development Bootcamp",
            "Sarah Johnson",
            "Learn HTML, CSS, JavaScript, React, Node.js, and MongoDB",
            CourseCategory::WebDevelopment,
            CourseLevel::Beginner,
            99.99,
            129.99,
            4.9,
            15420,
            52,
            &["HTML", "CSS", "JavaScript", "React", "Node.js"],
            true,
            270348,
            "2024-01-15",
        ),
        course(
            "Data Science with Python",
            "Michael Chen",
            "Master data analysis, visualization, and machine learning",
            CourseCategory::DataScience,
            CourseLevel::Intermediate,
            89.99,
            119.99,
            4.8,
            12350,
            48,
            &["Python", "Pandas", "NumPy", "Machine Learning"],
            false,
            577585,
            "2024-01-10",
        ),
        course(
            "UI/UX Design Fundamentals",
            "Emily Rodriguez",
            "Learn design principles, user research, and prototyping",
            CourseCategory::Design,
            CourseLevel::Beginner,
            79.99,
            99.99,
            4.9,
            9840,
            36,
            &["Figma", "Design Thinking", "Prototyping", "User Research"],
            true,
            196644,
            "2024-01-12",
        ),
        course(
            "Digital Marketing Mastery",
            "David Kim",
            "Complete guide to digital marketing and social media",
            CourseCategory::Marketing,
            CourseLevel::Intermediate,
            69.99,
            89.99,
            4.7,
            8900,
            42,
            &["SEO", "Social Media", "Google Ads", "Analytics"],
            false,
            265087,
            "2024-01-08",
        ),
        course(
            "Advanced React Development",
            "Alice Johnson",
            "Deep dive into React hooks, context, and performance",
            CourseCategory::WebDevelopment,
            CourseLevel::Advanced,
            149.99,
            199.99,
            4.8,
            6750,
            38,
            &["React", "TypeScript", "Redux", "Testing"],
            false,
            11035380,
            "2024-01-20",
        ),
        course(
            "Cybersecurity Fundamentals",
            "Robert Wilson",
            "Learn network security, ethical hacking, and risk management",
            CourseCategory::Cybersecurity,
            CourseLevel::Beginner,
            109.99,
            139.99,
            4.6,
            5420,
            44,
            &["Network Security", "Ethical Hacking", "Risk Management"],
            false,
            60504,
            "2024-01-05",
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn forum_post(
    title: &str,
    content: &str,
    author: (&str, Role, u32),
    category: &str,
    tag_list: &[&str],
    created_at: &str,
    updated_at: &str,
    counts: (u32, u32, u32, u32),
    pinned: bool,
    solved: bool,
) -> ForumPost {
    let (likes, dislikes, replies, views) = counts;
    ForumPost {
        id: Uuid::new_v4(),
        title: title.to_string(),
        content: content.to_string(),
        author: PostAuthor {
            name: author.0.to_string(),
            role: author.1,
            reputation: author.2,
        },
        category: category.to_string(),
        tags: tags(tag_list),
        created_at: ts(created_at),
        updated_at: ts(updated_at),
        likes,
        dislikes,
        replies,
        views,
        pinned,
        solved,
    }
}

fn forum_posts() -> Vec<ForumPost> {
    vec![
        forum_post(
            "Best practices for React component organization?",
            "I'm working on a large React project and struggling with how to organize my \
             components. What are some best practices you follow for folder structure and \
             component architecture?",
            ("Alex Chen", Role::Student, 245),
            "web-dev",
            &["React", "Architecture", "Best Practices"],
            "2024-01-25T10:30:00Z",
            "2024-01-25T14:20:00Z",
            (12, 1, 8, 156),
            false,
            false,
        ),
        forum_post(
            "How to transition from bootcamp to first developer job?",
            "I just finished a web development bootcamp and I'm feeling overwhelmed about job \
             searching. What should I focus on to make myself more attractive to employers?",
            ("Emma Davis", Role::Student, 67),
            "career",
            &["Career", "Job Search", "Bootcamp"],
            "2024-01-24T16:45:00Z",
            "2024-01-25T09:20:00Z",
            (24, 0, 15, 289),
            true,
            false,
        ),
        forum_post(
            "Understanding Python decorators - need help!",
            "I'm struggling to understand how decorators work in Python. Can someone explain \
             them in simple terms with practical examples?",
            ("David Kim", Role::Student, 156),
            "data-science",
            &["Python", "Decorators", "Programming"],
            "2024-01-24T14:20:00Z",
            "2024-01-24T18:45:00Z",
            (18, 2, 12, 234),
            false,
            true,
        ),
        forum_post(
            "Which Figma plugins do you use for handoff?",
            "Our design team is standardizing its workflow and I'd love to hear which plugins \
             people rely on when handing designs to developers.",
            ("Sarah Johnson", Role::Instructor, 1250),
            "design",
            &["Figma", "Workflow"],
            "2024-01-23T09:10:00Z",
            "2024-01-23T09:10:00Z",
            (9, 0, 0, 98),
            false,
            false,
        ),
        forum_post(
            "Study group for the data science track?",
            "Anyone interested in a weekly study group covering the data science track? \
             Thinking Tuesdays, timezone-friendly for Europe and the Americas.",
            ("Grace Lee", Role::Student, 89),
            "general",
            &["Study Group", "Data Science"],
            "2024-01-22T19:30:00Z",
            "2024-01-23T08:15:00Z",
            (31, 0, 21, 412),
            false,
            false,
        ),
        forum_post(
            "Certificate not showing after course completion",
            "I finished all modules yesterday but the certificate download is still locked. Is \
             there a processing delay or should I contact support?",
            ("Henry Chen", Role::Student, 34),
            "help",
            &["Certificates", "Support"],
            "2024-01-22T07:45:00Z",
            "2024-01-22T12:00:00Z",
            (3, 0, 4, 77),
            false,
            true,
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn blog_post(
    title: &str,
    excerpt: &str,
    author: &str,
    publish_date: &str,
    read_minutes: u32,
    category: &str,
    tag_list: &[&str],
    views: u32,
    comments: u32,
    featured: bool,
) -> BlogPost {
    BlogPost {
        id: Uuid::new_v4(),
        title: title.to_string(),
        excerpt: excerpt.to_string(),
        author: author.to_string(),
        publish_date: ts(&format!("{publish_date}T00:00:00Z")),
        read_minutes,
        category: category.to_string(),
        tags: tags(tag_list),
        views,
        comments,
        featured,
    }
}

fn blog_posts() -> Vec<BlogPost> {
    vec![
        blog_post(
            "The Future of Online Learning: AI-Powered Personalization",
            "Discover how artificial intelligence is revolutionizing the way we learn online, \
             creating personalized experiences that adapt to each student's unique learning \
             style and pace.",
            "Dr. Sarah Johnson",
            "2024-01-20",
            8,
            "Technology",
            &["AI", "EdTech", "Personalization", "Future"],
            2450,
            23,
            true,
        ),
        blog_post(
            "10 Essential Skills Every Developer Should Master in 2024",
            "Stay ahead of the curve with these crucial programming skills that will define \
             the tech landscape this year.",
            "Mike Chen",
            "2024-01-18",
            6,
            "Programming",
            &["Programming", "Skills", "Career"],
            1890,
            15,
            false,
        ),
        blog_post(
            "Building Effective Study Habits for Online Learning",
            "Learn proven strategies to maximize your learning potential and stay motivated in \
             virtual environments.",
            "Emma Davis",
            "2024-01-15",
            5,
            "Study Tips",
            &["Study", "Productivity", "Learning"],
            1650,
            12,
            false,
        ),
        blog_post(
            "The Rise of Micro-Learning: Bite-Sized Education for Busy Professionals",
            "How short-form content is transforming professional development and making \
             learning more accessible.",
            "Alex Rodriguez",
            "2024-01-12",
            7,
            "Education",
            &["Micro-learning", "Professional Development"],
            2100,
            18,
            false,
        ),
        blog_post(
            "Mastering React Hooks: A Complete Guide",
            "Deep dive into React Hooks with practical examples and best practices for modern \
             React development.",
            "David Wilson",
            "2024-01-10",
            12,
            "Programming",
            &["React", "JavaScript", "Web Development"],
            3200,
            28,
            false,
        ),
        blog_post(
            "Career Transition: From Bootcamp to Tech Job",
            "Real stories and practical advice from successful career changers who broke into \
             tech.",
            "Lisa Park",
            "2024-01-08",
            9,
            "Career",
            &["Career", "Bootcamp", "Job Search"],
            1750,
            22,
            false,
        ),
        blog_post(
            "Understanding Data Science: A Beginner's Roadmap",
            "Navigate the world of data science with this comprehensive guide for newcomers to \
             the field.",
            "Robert Kim",
            "2024-01-05",
            10,
            "Data Science",
            &["Data Science", "Beginner", "Analytics"],
            2800,
            31,
            false,
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn audit_entry(
    timestamp: &str,
    user: &str,
    user_name: &str,
    action: &str,
    resource: &str,
    resource_id: &str,
    details: &str,
    ip_address: &str,
    status: AuditStatus,
    severity: Severity,
) -> AuditEntry {
    AuditEntry {
        id: Uuid::new_v4(),
        timestamp: ts(timestamp),
        user: user.to_string(),
        user_name: user_name.to_string(),
        action: action.to_string(),
        resource: resource.to_string(),
        resource_id: resource_id.to_string(),
        details: details.to_string(),
        ip_address: ip_address.to_string(),
        user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36".to_string(),
        status,
        severity,
    }
}

fn audit_entries() -> Vec<AuditEntry> {
    vec![
        audit_entry(
            "2024-01-25T14:30:00Z",
            "admin@learnx.com",
            "Carol Davis",
            "USER_ROLE_CHANGED",
            "User Profile",
            "user_005",
            "Changed role from student to instructor for Emma Brown",
            "192.168.1.100",
            AuditStatus::Success,
            Severity::Medium,
        ),
        audit_entry(
            "2024-01-25T14:15:00Z",
            "instructor_001@learnx.com",
            "Alice Johnson",
            "COURSE_PUBLISHED",
            "Course",
            "course_004",
            "Published course \"Advanced React Development\"",
            "192.168.1.101",
            AuditStatus::Success,
            Severity::Low,
        ),
        audit_entry(
            "2024-01-25T13:45:00Z",
            "system@learnx.com",
            "System",
            "LOGIN_FAILED",
            "Authentication",
            "auth_attempt_123",
            "Failed login attempt for user john.doe@example.com - Invalid password",
            "203.0.113.45",
            AuditStatus::Failed,
            Severity::High,
        ),
        audit_entry(
            "2024-01-25T13:30:00Z",
            "instructor_002@learnx.com",
            "Bob Smith",
            "COURSE_CREATED",
            "Course",
            "course_005",
            "Created new course \"Machine Learning Basics\"",
            "192.168.1.102",
            AuditStatus::Success,
            Severity::Low,
        ),
        audit_entry(
            "2024-01-25T12:20:00Z",
            "admin@learnx.com",
            "Carol Davis",
            "USER_DELETED",
            "User Profile",
            "user_999",
            "Deleted user account for spam violation - test.user@spam.com",
            "192.168.1.100",
            AuditStatus::Success,
            Severity::High,
        ),
        audit_entry(
            "2024-01-25T11:45:00Z",
            "student_001@learnx.com",
            "John Doe",
            "PAYMENT_PROCESSED",
            "Payment",
            "payment_789",
            "Payment processed for course enrollment - $99.99",
            "192.168.1.103",
            AuditStatus::Success,
            Severity::Low,
        ),
        audit_entry(
            "2024-01-25T11:30:00Z",
            "system@learnx.com",
            "System",
            "BACKUP_COMPLETED",
            "Database",
            "backup_20240125",
            "Daily database backup completed successfully - 2.3GB",
            "127.0.0.1",
            AuditStatus::Success,
            Severity::Low,
        ),
        audit_entry(
            "2024-01-25T10:15:00Z",
            "instructor_003@learnx.com",
            "David Wilson",
            "CONTENT_MODERATED",
            "Course Content",
            "content_456",
            "Flagged inappropriate content in course discussion",
            "192.168.1.104",
            AuditStatus::Success,
            Severity::Medium,
        ),
    ]
}

fn review(
    course_id: Uuid,
    user_name: &str,
    rating: u8,
    title: &str,
    comment: &str,
    helpful_count: u32,
    created_at: &str,
) -> Review {
    Review {
        id: Uuid::new_v4(),
        course_id,
        user_name: user_name.to_string(),
        rating,
        title: title.to_string(),
        comment: comment.to_string(),
        helpful_count,
        verified_purchase: true,
        created_at: ts(created_at),
    }
}

fn reviews(courses: &[Course]) -> Vec<Review> {
    let web_dev = courses[0].id;
    let data_science = courses[1].id;
    let design = courses[2].id;

    vec![
        review(
            web_dev,
            "Bob Smith",
            5,
            "Outstanding course!",
            "The instructor explains everything clearly and the projects are very practical. I \
             learned so much and feel confident building web applications now.",
            12,
            "2024-01-20T14:30:00Z",
        ),
        review(
            web_dev,
            "Emma Brown",
            4,
            "Great course overall",
            "The content is comprehensive and up-to-date. Would have liked more advanced topics \
             covered.",
            8,
            "2024-01-18T10:15:00Z",
        ),
        review(
            web_dev,
            "Frank Miller",
            5,
            "Perfect for beginners!",
            "I had zero programming experience and now I can build websites. The step-by-step \
             approach is excellent.",
            15,
            "2024-01-22T16:45:00Z",
        ),
        review(
            data_science,
            "Grace Lee",
            4,
            "Solid data science course",
            "Good coverage of pandas, matplotlib, and scikit-learn. Could use more real-world \
             datasets.",
            6,
            "2024-01-19T11:20:00Z",
        ),
        review(
            data_science,
            "Henry Chen",
            5,
            "Excellent instructor",
            "Excellent instructor and well-structured curriculum. The machine learning section \
             was particularly helpful for my career transition.",
            9,
            "2024-01-21T09:30:00Z",
        ),
        review(
            design,
            "Bob Smith",
            4,
            "Great introduction to UI/UX",
            "Learned a lot about user research and design principles. More hands-on exercises \
             would be beneficial.",
            7,
            "2024-01-17T13:15:00Z",
        ),
    ]
}
