//! The built-in query definitions, in display order.
//!
//! Documents and operation names are carried over verbatim from the LeetCode
//! web client's public GraphQL surface; the relay sends them untouched.

use crate::definition::QueryDefinition;

pub const DEFINITIONS: &[QueryDefinition] = &[
    QueryDefinition {
        id: "userProfile",
        name: "User Profile Information",
        description: "Fetches basic user profile data, including contest badges, social media \
                      links, personal details, and activity counts.",
        category: "Profile",
        operation_name: "userPublicProfile",
        requires_auth: false,
        variable_spec: &[("username", "String!")],
        query: r"query userPublicProfile($username: String!) {
  matchedUser(username: $username) {
    contestBadge { name expired hoverText icon }
    username
    githubUrl
    twitterUrl
    linkedinUrl
    profile {
      ranking userAvatar realName aboutMe school websites countryName
      company jobTitle skillTags postViewCount postViewCountDiff
      reputation reputationDiff solutionCount solutionCountDiff
      categoryDiscussCount categoryDiscussCountDiff certificationLevel
    }
  }
}",
    },
    QueryDefinition {
        id: "languageStats",
        name: "Programming Language Statistics",
        description: "Retrieves problems solved broken down by programming language.",
        category: "Statistics",
        operation_name: "languageStats",
        requires_auth: false,
        variable_spec: &[("username", "String!")],
        query: r"query languageStats($username: String!) {
  matchedUser(username: $username) {
    languageProblemCount { languageName problemsSolved }
  }
}",
    },
    QueryDefinition {
        id: "skillStats",
        name: "Problem-Solving Skills Statistics",
        description: "Provides problems solved categorized by skill areas (advanced, \
                      intermediate, fundamental).",
        category: "Statistics",
        operation_name: "skillStats",
        requires_auth: false,
        variable_spec: &[("username", "String!")],
        query: r"query skillStats($username: String!) {
  matchedUser(username: $username) {
    tagProblemCounts {
      advanced { tagName tagSlug problemsSolved }
      intermediate { tagName tagSlug problemsSolved }
      fundamental { tagName tagSlug problemsSolved }
    }
  }
}",
    },
    QueryDefinition {
        id: "contestRanking",
        name: "Contest History and Rankings",
        description: "Gathers a user's contest participation history and ranking details.",
        category: "Contest",
        operation_name: "userContestRankingInfo",
        requires_auth: false,
        variable_spec: &[("username", "String!")],
        query: r"query userContestRankingInfo($username: String!) {
  userContestRanking(username: $username) {
    attendedContestsCount rating globalRanking totalParticipants
    topPercentage badge { name }
  }
  userContestRankingHistory(username: $username) {
    attended trendDirection problemsSolved totalProblems
    finishTimeInSeconds rating ranking
    contest { title startTime }
  }
}",
    },
    QueryDefinition {
        id: "problemProgress",
        name: "Problem Progress by Difficulty",
        description: "Offers a detailed breakdown of a user's problem progress by difficulty \
                      level (Easy, Medium, Hard).",
        category: "Progress",
        operation_name: "userProfileUserQuestionProgress",
        requires_auth: false,
        variable_spec: &[("userSlug", "String!")],
        query: r"query userProfileUserQuestionProgress($userSlug: String!) {
  userProfileUserQuestionProgress(userSlug: $userSlug) {
    numAcceptedQuestions { difficulty count }
    numFailedQuestions { difficulty count }
    numUntouchedQuestions { difficulty count }
  }
}",
    },
    QueryDefinition {
        id: "submissionStats",
        name: "Overall Submission Statistics",
        description: "Provides overall submission statistics and problem counts by difficulty.",
        category: "Statistics",
        operation_name: "userProblemsSolved",
        requires_auth: false,
        variable_spec: &[("username", "String!")],
        query: r"query userProblemsSolved($username: String!) {
  allQuestionsCount { difficulty count }
  matchedUser(username: $username) {
    submitStats {
      acSubmissionNum { difficulty count submissions }
      totalSubmissionNum { difficulty count submissions }
    }
  }
}",
    },
    QueryDefinition {
        id: "userCalendar",
        name: "User Submission Calendar",
        description: "Fetches a user's activity calendar, including active years, streaks, \
                      total active days, and submission counts.",
        category: "Activity",
        operation_name: "userProfileCalendar",
        requires_auth: false,
        variable_spec: &[("username", "String!")],
        query: r"query userProfileCalendar($username: String!) {
  matchedUser(username: $username) {
    userCalendar {
      activeYears
      streak
      totalActiveDays
      submissionCalendar
    }
  }
}",
    },
    QueryDefinition {
        id: "recentSubmissions",
        name: "Recent Accepted Submissions",
        description: "Lists a specified number of a user's most recently accepted (solved) \
                      problems.",
        category: "Activity",
        operation_name: "recentAcSubmissions",
        requires_auth: false,
        variable_spec: &[("username", "String!"), ("limit", "Int!")],
        query: r"query recentAcSubmissions($username: String!, $limit: Int!) {
  recentAcSubmissionList(username: $username, limit: $limit) {
    id title titleSlug timestamp
  }
}",
    },
    QueryDefinition {
        id: "dailyChallenge",
        name: "Daily Coding Challenge Information",
        description: "Retrieves comprehensive details about the current day's Daily Coding \
                      Challenge question.",
        category: "Challenge",
        operation_name: "questionOfToday",
        requires_auth: false,
        variable_spec: &[],
        query: r"query questionOfToday {
  activeDailyCodingChallengeQuestion {
    date
    link
    question {
      titleSlug
      title
      difficulty
      frontendQuestionId: questionFrontendId
      status
      topicTags { name id slug }
    }
  }
}",
    },
    QueryDefinition {
        id: "upcomingContests",
        name: "Upcoming Contests",
        description: "Retrieves information about all upcoming contests.",
        category: "Contest",
        operation_name: "getContests",
        requires_auth: false,
        variable_spec: &[],
        query: r"query getContests {
  allContests {
    title
    titleSlug
    startTime
    duration
    isVirtual
  }
}",
    },
    QueryDefinition {
        id: "streakCounter",
        name: "User Streak Counter",
        description: "Retrieves current daily streak information for the authenticated user.",
        category: "Activity",
        operation_name: "getStreakCounter",
        requires_auth: true,
        variable_spec: &[],
        query: r"query getStreakCounter {
  streakCounter {
    streakCount
    daysSkipped
    currentDayCompleted
  }
}",
    },
    QueryDefinition {
        id: "currentTimestamp",
        name: "Current Server Timestamp",
        description: "Gets the current server timestamp in Unix epoch seconds (with \
                      milliseconds).",
        category: "System",
        operation_name: "currentTimestamp",
        requires_auth: false,
        variable_spec: &[],
        query: r"query currentTimestamp {
  currentTimestamp
}",
    },
    QueryDefinition {
        id: "activeBadge",
        name: "Active User Badge Information",
        description: "Specifically fetches details about a user's currently active badge.",
        category: "Profile",
        operation_name: "getUserProfile",
        requires_auth: false,
        variable_spec: &[("username", "String!")],
        query: r"query getUserProfile($username: String!) {
  matchedUser(username: $username) {
    activeBadge { displayName icon }
  }
}",
    },
    QueryDefinition {
        id: "challengeMedal",
        name: "Daily Coding Challenge Medal Information",
        description: "Provides the name and icon configuration for a Daily Coding Challenge \
                      medal for a specific year and month.",
        category: "Challenge",
        operation_name: "codingChallengeMedal",
        requires_auth: true,
        variable_spec: &[("year", "Int!"), ("month", "Int!")],
        query: r"query codingChallengeMedal($year: Int!, $month: Int!) {
  dailyChallengeMedal(year: $year, month: $month) {
    name
    config { icon }
  }
}",
    },
    QueryDefinition {
        id: "userBadges",
        name: "User Badges Information",
        description: "Fetches information about a user's earned badges and upcoming badges.",
        category: "Profile",
        operation_name: "userBadges",
        requires_auth: false,
        variable_spec: &[("username", "String!")],
        query: r"query userBadges($username: String!) {
  matchedUser(username: $username) {
    badges {
      id name displayName icon hoverText
      creationDate category
    }
    upcomingBadges { name icon progress }
  }
}",
    },
];
