/// Schema description served by `GET /api/graphql`
pub const SCHEMA: &str = r#"
  type Query {
    session(id: ID!): Session
    sessions: [Session!]!
  }

  type Mutation {
    createSession: Session!
    addTranscript(sessionId: ID!, text: String!, confidence: Float!): Transcript!
    deleteSession(id: ID!): Boolean!
  }

  type Subscription {
    transcriptAdded(sessionId: ID!): Transcript!
  }

  type Session {
    id: ID!
    createdAt: String!
    transcripts: [Transcript!]!
  }

  type Transcript {
    id: ID!
    text: String!
    confidence: Float!
    timestamp: String!
    isFinal: Boolean!
  }
"#;
