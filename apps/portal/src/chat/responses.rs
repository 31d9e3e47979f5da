//! Canned reply tables for the assistant, one table per topic. The bot picks
//! uniformly at random within a table.

pub const GREETINGS: &[&str] = &[
    "Hello! I'm PlacementBot, your AI career assistant. How can I help you today?",
    "Hi there! I'm here to help you with your career journey. What would you like to know?",
    "Welcome! I can assist you with job searches, resume tips, interview preparation, and more!",
];

pub const JOBS: &[&str] = &[
    "I can help you find relevant job opportunities! Based on your profile, here are some suggestions:\n\n\
     • Software Developer positions at tech startups\n\
     • Data Analyst roles in finance\n\
     • Product Manager opportunities\n\n\
     Would you like me to show you specific job listings?",
    "Great! Let me help you with job searching. What type of role are you looking for? I can filter opportunities by:\n\n\
     • Industry\n\
     • Experience level\n\
     • Location\n\
     • Salary range\n\
     • Company size",
];

pub const RESUME: &[&str] = &[
    "Here are some key resume tips:\n\n\
     • Keep it concise (1-2 pages)\n\
     • Use action verbs and quantify achievements\n\
     • Tailor it for each job application\n\
     • Include relevant keywords from job descriptions\n\
     • Proofread carefully\n\n\
     Would you like specific advice for your field?",
    "I'd be happy to help with your resume! Here's what makes a great resume:\n\n\
     • Clear, professional formatting\n\
     • Strong summary statement\n\
     • Relevant work experience with measurable results\n\
     • Skills section matching job requirements\n\
     • Education and certifications\n\n\
     Do you have a specific section you'd like help with?",
];

pub const INTERVIEW: &[&str] = &[
    "Interview preparation is crucial! Here are my top tips:\n\n\
     • Research the company thoroughly\n\
     • Practice common interview questions\n\
     • Prepare specific examples using the STAR method\n\
     • Dress appropriately\n\
     • Arrive 10-15 minutes early\n\
     • Prepare thoughtful questions to ask\n\n\
     What type of interview are you preparing for?",
    "Let me help you ace that interview! Key areas to focus on:\n\n\
     • Technical skills (if applicable)\n\
     • Behavioral questions\n\
     • Company culture fit\n\
     • Your career goals\n\
     • Questions about the role\n\n\
     Would you like to practice some common questions?",
];

pub const SKILLS: &[&str] = &[
    "Skill development is essential for career growth! Popular in-demand skills include:\n\n\
     • Programming languages (Python, JavaScript, Java)\n\
     • Data analysis and visualization\n\
     • Digital marketing\n\
     • Project management\n\
     • Communication and leadership\n\n\
     What area would you like to develop?",
    "Great question! Here are ways to build valuable skills:\n\n\
     • Online courses (Coursera, Udemy, LinkedIn Learning)\n\
     • Certifications in your field\n\
     • Personal projects and portfolios\n\
     • Networking and mentorship\n\
     • Industry conferences and workshops\n\n\
     What's your current career focus?",
];

pub const SALARY: &[&str] = &[
    "Salary negotiation tips:\n\n\
     • Research market rates for your role\n\
     • Consider the total compensation package\n\
     • Practice your negotiation conversation\n\
     • Be prepared to justify your request\n\
     • Know when to negotiate (usually after an offer)\n\n\
     What position are you considering?",
    "Here's how to approach salary discussions:\n\n\
     • Wait for them to make the first offer\n\
     • Express enthusiasm for the role first\n\
     • Present your research and value proposition\n\
     • Be flexible and consider non-salary benefits\n\
     • Get everything in writing\n\n\
     Need help with market research?",
];

pub const NETWORKING: &[&str] = &[
    "Networking is key to career success! Here's how to build your network:\n\n\
     • Attend industry events and meetups\n\
     • Join professional associations\n\
     • Connect on LinkedIn thoughtfully\n\
     • Offer help before asking for favors\n\
     • Follow up consistently\n\n\
     What industry are you in?",
    "Building professional relationships is crucial! Try these strategies:\n\n\
     • Reach out to alumni from your school\n\
     • Engage with content on social media\n\
     • Volunteer for industry organizations\n\
     • Attend virtual events and webinars\n\
     • Ask for informational interviews\n\n\
     Would you like help crafting networking messages?",
];

pub const FALLBACK: &[&str] = &[
    "I'm here to help with your career journey! I can assist with:\n\n\
     • Job searching strategies\n\
     • Resume and cover letter tips\n\
     • Interview preparation\n\
     • Skill development advice\n\
     • Salary negotiation\n\
     • Networking guidance\n\n\
     What would you like to explore?",
    "That's an interesting question! While I specialize in career and placement guidance, I'm always learning. Could you rephrase your question or ask about:\n\n\
     • Job opportunities\n\
     • Career development\n\
     • Interview tips\n\
     • Resume advice\n\
     • Professional skills",
    "I'd love to help you with that! My expertise is in career guidance and job placement. Is there a specific career-related topic you'd like to discuss?",
];
